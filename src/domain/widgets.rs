//! Typed content widgets and the constructors the demo table is written with.
//!
//! Constructors never validate: a level-9 heading or an order collision is
//! emitted exactly as written. Layout rules live in [`crate::domain::layout`].

use serde::{Deserialize, Serialize};

use super::types::{DividerStyle, LinkTarget, ObjectFit};

const DEFAULT_DIVIDER_COLOR: &str = "var(--color-border)";
const DEFAULT_DIVIDER_HEIGHT: &str = "2px";

/// A content block placed at a `(column, order)` slot inside a row.
///
/// Field order matters: the renderer's documents list `type`, `column`,
/// `order`, then the kind-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Widget {
    Heading {
        column: u32,
        order: u32,
        content: String,
        level: u8,
    },
    Text {
        column: u32,
        order: u32,
        content: String,
    },
    Image {
        column: u32,
        order: u32,
        src: String,
        alt: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(
            rename = "objectFit",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        object_fit: Option<ObjectFit>,
    },
    Links {
        column: u32,
        order: u32,
        columns: u32,
        items: Vec<LinkItem>,
    },
    Divider {
        column: u32,
        order: u32,
        #[serde(default)]
        style: DividerStyle,
        color: String,
        height: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub title: String,
    pub url: String,
    pub icon: String,
    #[serde(default)]
    pub target: LinkTarget,
}

impl Widget {
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Heading { .. } => "heading",
            Widget::Text { .. } => "text",
            Widget::Image { .. } => "image",
            Widget::Links { .. } => "links",
            Widget::Divider { .. } => "divider",
        }
    }

    pub fn column(&self) -> u32 {
        self.slot().0
    }

    pub fn order(&self) -> u32 {
        self.slot().1
    }

    /// Place the widget in column 1 at the given order.
    pub fn at(self, order: u32) -> Self {
        self.at_column(1, order)
    }

    pub fn at_column(mut self, column: u32, order: u32) -> Self {
        let (slot_column, slot_order) = self.slot_mut();
        *slot_column = column;
        *slot_order = order;
        self
    }

    /// Fix an image's width; other widgets are returned unchanged.
    pub fn with_width(mut self, value: u32) -> Self {
        if let Widget::Image { width, .. } = &mut self {
            *width = Some(value);
        }
        self
    }

    /// Override an image's fit mode; `None` drops `objectFit` from the document.
    pub fn with_fit(mut self, fit: Option<ObjectFit>) -> Self {
        if let Widget::Image { object_fit, .. } = &mut self {
            *object_fit = fit;
        }
        self
    }

    pub fn styled(
        mut self,
        line: DividerStyle,
        line_color: impl Into<String>,
        line_height: impl Into<String>,
    ) -> Self {
        if let Widget::Divider {
            style,
            color,
            height,
            ..
        } = &mut self
        {
            *style = line;
            *color = line_color.into();
            *height = line_height.into();
        }
        self
    }

    fn slot(&self) -> (u32, u32) {
        match self {
            Widget::Heading { column, order, .. }
            | Widget::Text { column, order, .. }
            | Widget::Image { column, order, .. }
            | Widget::Links { column, order, .. }
            | Widget::Divider { column, order, .. } => (*column, *order),
        }
    }

    fn slot_mut(&mut self) -> (&mut u32, &mut u32) {
        match self {
            Widget::Heading { column, order, .. }
            | Widget::Text { column, order, .. }
            | Widget::Image { column, order, .. }
            | Widget::Links { column, order, .. }
            | Widget::Divider { column, order, .. } => (column, order),
        }
    }
}

pub fn heading(content: impl Into<String>, level: u8) -> Widget {
    Widget::Heading {
        column: 1,
        order: 1,
        content: content.into(),
        level,
    }
}

pub fn text(content: impl Into<String>) -> Widget {
    Widget::Text {
        column: 1,
        order: 1,
        content: content.into(),
    }
}

/// Full-width image with `cover` fit.
pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Widget {
    Widget::Image {
        column: 1,
        order: 1,
        src: src.into(),
        alt: alt.into(),
        width: None,
        object_fit: Some(ObjectFit::Cover),
    }
}

pub fn links(items: Vec<LinkItem>, columns: u32) -> Widget {
    Widget::Links {
        column: 1,
        order: 1,
        columns,
        items,
    }
}

pub fn link(
    title: impl Into<String>,
    url: impl Into<String>,
    icon: impl Into<String>,
    target: LinkTarget,
) -> LinkItem {
    LinkItem {
        title: title.into(),
        url: url.into(),
        icon: icon.into(),
        target,
    }
}

pub fn divider() -> Widget {
    Widget::Divider {
        column: 1,
        order: 1,
        style: DividerStyle::Solid,
        color: DEFAULT_DIVIDER_COLOR.to_string(),
        height: DEFAULT_DIVIDER_HEIGHT.to_string(),
    }
}
