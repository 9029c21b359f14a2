//! Scroll compatibility layer
//!
//! Describes a scrollable container for the host renderer. On the browser
//! the container carries CSS that makes it scroll with momentum; on native
//! platforms it is a pass-through to the platform's own scroll view, with
//! the caller's options handed over untouched.
//!
//! In vertical mode a trailing spacer is appended after the content so the
//! last field or button clears the on-screen keyboard. Horizontal mode
//! suppresses the spacer and switches the layout axis.

use crate::platform::Platform;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tabib_conf::ScrollSettings;

/// Recognised scroll options plus an open-ended bag of extras forwarded
/// verbatim to the underlying container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollViewProps {
	pub shows_vertical_indicator: bool,
	pub shows_horizontal_indicator: bool,
	pub horizontal: bool,
	pub content_padding: Option<f32>,
	#[serde(flatten)]
	extra: BTreeMap<String, Value>,
}

impl Default for ScrollViewProps {
	fn default() -> Self {
		Self {
			shows_vertical_indicator: true,
			shows_horizontal_indicator: true,
			horizontal: false,
			content_padding: None,
			extra: BTreeMap::new(),
		}
	}
}

const TYPED_KEYS: [&str; 4] = [
	"shows_vertical_indicator",
	"shows_horizontal_indicator",
	"horizontal",
	"content_padding",
];

impl ScrollViewProps {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn horizontal(mut self, horizontal: bool) -> Self {
		self.horizontal = horizontal;
		self
	}

	pub fn shows_vertical_indicator(mut self, shows: bool) -> Self {
		self.shows_vertical_indicator = shows;
		self
	}

	pub fn shows_horizontal_indicator(mut self, shows: bool) -> Self {
		self.shows_horizontal_indicator = shows;
		self
	}

	pub fn content_padding(mut self, padding: f32) -> Self {
		self.content_padding = Some(padding);
		self
	}

	/// Add an option this layer does not interpret.
	///
	/// Keys naming one of the typed options are dropped so the serialized
	/// props never carry the same key twice.
	pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		let key = key.into();
		if TYPED_KEYS.contains(&key.as_str()) {
			tracing::warn!(key = %key, "extra scroll option shadows a typed option, ignored");
			return self;
		}
		self.extra.insert(key, value.into());
		self
	}

	pub fn extra(&self, key: &str) -> Option<&Value> {
		self.extra.get(key)
	}

	fn shows_indicator(&self) -> bool {
		if self.horizontal {
			self.shows_horizontal_indicator
		} else {
			self.shows_vertical_indicator
		}
	}
}

/// Ordered CSS declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleMap(Vec<(String, String)>);

impl StyleMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set a property, keeping its position if already present.
	pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
		let property = property.into();
		let value = value.into();
		match self.0.iter_mut().find(|(p, _)| *p == property) {
			Some(entry) => entry.1 = value,
			None => self.0.push((property, value)),
		}
	}

	pub fn get(&self, property: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(p, _)| p == property)
			.map(|(_, v)| v.as_str())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(p, v)| (p.as_str(), v.as_str()))
	}

	/// Render as inline CSS: `property: value;` declarations separated by a space.
	pub fn to_css(&self) -> String {
		self.0
			.iter()
			.map(|(p, v)| format!("{p}: {v};"))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

/// One entry of the container's child list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScrollChild<C> {
	Content { content: C },
	Spacer { min_height: f32 },
}

/// Built container, ready for the host renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "renderer", rename_all = "snake_case")]
pub enum ScrollContainer<C> {
	/// Browser renderer: the layer's own styling applies.
	Web {
		style: StyleMap,
		props: ScrollViewProps,
		children: Vec<ScrollChild<C>>,
	},
	/// Native renderer: props go straight to the platform scroll view.
	Native {
		props: ScrollViewProps,
		children: Vec<ScrollChild<C>>,
	},
}

impl<C> ScrollContainer<C> {
	pub fn props(&self) -> &ScrollViewProps {
		match self {
			ScrollContainer::Web { props, .. } | ScrollContainer::Native { props, .. } => props,
		}
	}

	pub fn children(&self) -> &[ScrollChild<C>] {
		match self {
			ScrollContainer::Web { children, .. } | ScrollContainer::Native { children, .. } => {
				children
			}
		}
	}

	/// Web styling, or `None` for native containers.
	pub fn style(&self) -> Option<&StyleMap> {
		match self {
			ScrollContainer::Web { style, .. } => Some(style),
			ScrollContainer::Native { .. } => None,
		}
	}

	pub fn has_spacer(&self) -> bool {
		self.children()
			.iter()
			.any(|child| matches!(child, ScrollChild::Spacer { .. }))
	}

	/// The caller's content, without the spacer.
	pub fn content(&self) -> impl Iterator<Item = &C> {
		self.children().iter().filter_map(|child| match child {
			ScrollChild::Content { content } => Some(content),
			ScrollChild::Spacer { .. } => None,
		})
	}
}

/// Builder for a [`ScrollContainer`].
///
/// # Examples
///
/// ```
/// use tabib_conf::ScrollSettings;
/// use tabib_pages::{Platform, ScrollView, ScrollViewProps};
///
/// let settings = ScrollSettings::default();
/// let web = ScrollView::new(ScrollViewProps::new().with_extra("testID", "form"))
///     .child("name field")
///     .build(Platform::Web, &settings);
///
/// let style = web.style().unwrap();
/// assert_eq!(style.get("overflow-y"), Some("auto"));
/// assert_eq!(style.get("height"), Some("100vh"));
/// assert!(web.has_spacer());
///
/// let native = ScrollView::new(ScrollViewProps::new())
///     .child("name field")
///     .build(Platform::Android, &settings);
/// assert!(native.style().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ScrollView<C> {
	props: ScrollViewProps,
	children: Vec<C>,
}

impl<C> ScrollView<C> {
	pub fn new(props: ScrollViewProps) -> Self {
		Self {
			props,
			children: Vec::new(),
		}
	}

	pub fn child(mut self, child: C) -> Self {
		self.children.push(child);
		self
	}

	pub fn children(mut self, children: impl IntoIterator<Item = C>) -> Self {
		self.children.extend(children);
		self
	}

	/// Build for the platform this binary runs on.
	pub fn build_current(self, settings: &ScrollSettings) -> ScrollContainer<C> {
		self.build(Platform::current(), settings)
	}

	/// Build for an explicit platform.
	pub fn build(self, platform: Platform, settings: &ScrollSettings) -> ScrollContainer<C> {
		let mut children: Vec<ScrollChild<C>> = self
			.children
			.into_iter()
			.map(|content| ScrollChild::Content { content })
			.collect();
		if !self.props.horizontal {
			children.push(ScrollChild::Spacer {
				min_height: settings.spacer_min_height,
			});
		}

		if platform.is_web() {
			ScrollContainer::Web {
				style: web_style(&self.props),
				props: self.props,
				children,
			}
		} else {
			ScrollContainer::Native {
				props: self.props,
				children,
			}
		}
	}
}

fn web_style(props: &ScrollViewProps) -> StyleMap {
	let mut style = StyleMap::new();
	if props.horizontal {
		style.set("overflow-x", "auto");
		style.set("overflow-y", "hidden");
		style.set("width", "100%");
	} else {
		style.set("overflow-y", "auto");
		style.set("overflow-x", "hidden");
		style.set("height", "100vh");
	}
	style.set("-webkit-overflow-scrolling", "touch");
	style.set("display", "flex");
	style.set(
		"flex-direction",
		if props.horizontal { "row" } else { "column" },
	);
	if let Some(padding) = props.content_padding {
		style.set("padding", format!("{padding}px"));
	}
	if !props.shows_indicator() {
		style.set("scrollbar-width", "none");
		style.set("-ms-overflow-style", "none");
	}
	style
}
