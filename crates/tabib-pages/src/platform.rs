//! Host platform detection and per-platform module substitution.
//!
//! The same screens run in a browser and inside native shells. Native-only
//! capabilities (maps, image picking, camera) are bound per platform to
//! either a native module or a web stand-in, the way a bundler alias table
//! would swap them at build time.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Renderer the client runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
	Web,
	Android,
	Ios,
	Desktop,
}

impl Platform {
	pub const ALL: [Platform; 4] = [
		Platform::Web,
		Platform::Android,
		Platform::Ios,
		Platform::Desktop,
	];

	/// Platform of the current compilation target.
	pub fn current() -> Self {
		if cfg!(target_arch = "wasm32") {
			Platform::Web
		} else if cfg!(target_os = "android") {
			Platform::Android
		} else if cfg!(target_os = "ios") {
			Platform::Ios
		} else {
			Platform::Desktop
		}
	}

	/// Whether the platform renders through a browser engine and therefore
	/// honours CSS scroll styling.
	pub fn is_web(self) -> bool {
		matches!(self, Platform::Web)
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Platform::Web => "web",
			Platform::Android => "android",
			Platform::Ios => "ios",
			Platform::Desktop => "desktop",
		}
	}
}

impl fmt::Display for Platform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Native capability that needs a per-platform binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
	MapView,
	ImagePicker,
	Camera,
}

impl Capability {
	pub const ALL: [Capability; 3] = [
		Capability::MapView,
		Capability::ImagePicker,
		Capability::Camera,
	];
}

/// Module a capability resolves to on one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "module", rename_all = "snake_case")]
pub enum ModuleTarget {
	Native(String),
	WebStandIn(String),
}

impl ModuleTarget {
	pub fn module(&self) -> &str {
		match self {
			ModuleTarget::Native(name) | ModuleTarget::WebStandIn(name) => name,
		}
	}

	pub fn is_stand_in(&self) -> bool {
		matches!(self, ModuleTarget::WebStandIn(_))
	}
}

/// Per-platform substitution table.
///
/// # Examples
///
/// ```
/// use tabib_pages::{Capability, ModuleAliases, ModuleTarget, Platform};
///
/// let aliases = ModuleAliases::default();
/// let map = aliases.resolve(Platform::Web, Capability::MapView).unwrap();
/// assert!(map.is_stand_in());
///
/// let map = aliases.resolve(Platform::Android, Capability::MapView).unwrap();
/// assert_eq!(map, &ModuleTarget::Native("native-maps".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleAliases {
	table: HashMap<(Platform, Capability), ModuleTarget>,
}

impl ModuleAliases {
	/// Table with no bindings at all.
	pub fn empty() -> Self {
		Self {
			table: HashMap::new(),
		}
	}

	/// Bind `capability` on `platform`, replacing any previous binding.
	pub fn alias(&mut self, platform: Platform, capability: Capability, target: ModuleTarget) {
		self.table.insert((platform, capability), target);
	}

	pub fn resolve(&self, platform: Platform, capability: Capability) -> Option<&ModuleTarget> {
		self.table.get(&(platform, capability))
	}

	/// Capabilities with no binding on `platform`, in declaration order.
	pub fn missing(&self, platform: Platform) -> Vec<Capability> {
		Capability::ALL
			.into_iter()
			.filter(|capability| !self.table.contains_key(&(platform, *capability)))
			.collect()
	}
}

impl Default for ModuleAliases {
	/// Native modules on Android and iOS; web stand-ins on the browser and
	/// in the desktop webview shell.
	fn default() -> Self {
		let mut aliases = Self::empty();
		for platform in Platform::ALL {
			for capability in Capability::ALL {
				let target = match (platform, capability) {
					(Platform::Android | Platform::Ios, Capability::MapView) => {
						ModuleTarget::Native("native-maps".to_string())
					}
					(Platform::Android | Platform::Ios, Capability::ImagePicker) => {
						ModuleTarget::Native("native-image-picker".to_string())
					}
					(Platform::Android | Platform::Ios, Capability::Camera) => {
						ModuleTarget::Native("native-camera".to_string())
					}
					(_, Capability::MapView) => ModuleTarget::WebStandIn("web-maps".to_string()),
					(_, Capability::ImagePicker) => {
						ModuleTarget::WebStandIn("web-file-input".to_string())
					}
					(_, Capability::Camera) => {
						ModuleTarget::WebStandIn("web-media-devices".to_string())
					}
				};
				aliases.alias(platform, capability, target);
			}
		}
		aliases
	}
}
