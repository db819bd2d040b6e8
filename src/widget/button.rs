//! CmButton - themed button with custom colors, an optional icon and a
//! tap ripple
//!
//! The button keeps its canvas objects (background, tap background, label,
//! icon, shadow) and rebuilds their colors and geometry on every
//! state-affecting change. Rebuilding is idempotent: calling
//! [`CmButton::refresh`] twice gives the same result as calling it once.

use std::rc::Rc;
use std::time::Instant;

use crate::animation::{Animation, Easing, DURATION_STANDARD_MS};
use crate::canvas::{CanvasObject, IconTint, Image, Rectangle, Resource, Text};
use crate::geometry::{Position, Size};
use crate::layout::{HBoxLayout, Layout};
use crate::theme::{Color, ColorName, Theme};

use super::{ButtonAlign, ButtonIconPlacement, ButtonImportance, Cursor, KeyName, WidgetState};

/// Per-button colors, captured from the theme at construction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonColors {
    pub enabled: Color,
    pub disabled: Color,
    pub focused: Color,
    pub primary: Color,
    pub hover: Color,
}

impl ButtonColors {
    pub fn from_theme(theme: &dyn Theme) -> Self {
        Self {
            enabled: theme.color(ColorName::Button),
            disabled: theme.color(ColorName::DisabledButton),
            focused: theme.color(ColorName::Focus),
            primary: theme.color(ColorName::Primary),
            hover: theme.color(ColorName::Hover),
        }
    }
}

/// Elevation of a drop shadow
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadowLevel {
    /// Flat, for low importance buttons
    #[default]
    Base,
    Button,
}

/// Drop shadow drawn behind the button background
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shadow {
    pub level: ShadowLevel,
    pub color: Color,
    pub position: Position,
    pub size: Size,
}

impl Shadow {
    fn layout(&mut self, pos: Position, size: Size) {
        self.position = pos;
        self.size = size;
    }
}

/// Position of content of `object_size` inside `layout_size`
fn aligned_position(
    align: ButtonAlign,
    padding: Size,
    object_size: Size,
    layout_size: Size,
) -> Position {
    let y = (layout_size.height - object_size.height) / 2.0;
    let x = match align {
        ButtonAlign::Center => (layout_size.width - object_size.width) / 2.0,
        ButtonAlign::Leading => padding.width / 2.0,
        ButtonAlign::Trailing => layout_size.width - object_size.width - padding.width / 2.0,
    };
    Position::new(x, y)
}

/// Button with a text label, optional icon and custom colors
pub struct CmButton {
    text: String,
    icon: Option<Resource>,
    importance: ButtonImportance,
    alignment: ButtonAlign,
    icon_placement: ButtonIconPlacement,
    colors: ButtonColors,
    on_tapped: Option<Box<dyn FnMut()>>,

    hovered: bool,
    focused: bool,
    disabled: bool,
    hidden: bool,
    position: Position,
    size: Size,

    theme: Rc<dyn Theme>,
    layout: HBoxLayout,
    tap_anim: Animation,

    background: Rectangle,
    tap_bg: Rectangle,
    label: Text,
    icon_image: Option<Image>,
    shadow: Shadow,
}

impl std::fmt::Debug for CmButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmButton")
            .field("text", &self.text)
            .field("icon", &self.icon)
            .field("importance", &self.importance)
            .field("state", &self.state())
            .field("size", &self.size)
            .finish()
    }
}

impl CmButton {
    /// Create a button with a label and tap handler
    pub fn new(theme: Rc<dyn Theme>, label: impl Into<String>, tapped: impl FnMut() + 'static) -> Self {
        Self::build(theme, label.into(), None, Some(Box::new(tapped)))
    }

    /// Create a button with a label, icon and tap handler
    pub fn with_icon(
        theme: Rc<dyn Theme>,
        label: impl Into<String>,
        icon: Resource,
        tapped: impl FnMut() + 'static,
    ) -> Self {
        Self::build(theme, label.into(), Some(icon), Some(Box::new(tapped)))
    }

    /// Create a button with no tap handler yet
    pub fn without_handler(theme: Rc<dyn Theme>, label: impl Into<String>) -> Self {
        Self::build(theme, label.into(), None, None)
    }

    fn build(
        theme: Rc<dyn Theme>,
        text: String,
        icon: Option<Resource>,
        on_tapped: Option<Box<dyn FnMut()>>,
    ) -> Self {
        let colors = ButtonColors::from_theme(theme.as_ref());
        let mut button = Self {
            label: Text::new(text.clone()),
            text,
            icon,
            importance: ButtonImportance::default(),
            alignment: ButtonAlign::default(),
            icon_placement: ButtonIconPlacement::default(),
            colors,
            on_tapped,
            hovered: false,
            focused: false,
            disabled: false,
            hidden: false,
            position: Position::ORIGIN,
            size: Size::ZERO,
            layout: HBoxLayout::new(theme.clone()),
            theme,
            tap_anim: Animation::progress_curve(DURATION_STANDARD_MS, Easing::EaseOut),
            background: Rectangle::new(colors.enabled),
            tap_bg: Rectangle::new(Color::TRANSPARENT),
            icon_image: None,
            shadow: Shadow::default(),
        };
        button.refresh();
        button
    }

    // --- Properties ---

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Change the label text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.refresh();
    }

    pub fn icon(&self) -> Option<&Resource> {
        self.icon.as_ref()
    }

    /// Change the icon; `None` hides it
    pub fn set_icon(&mut self, icon: Option<Resource>) {
        self.icon = icon;
        self.refresh();
    }

    pub fn importance(&self) -> ButtonImportance {
        self.importance
    }

    pub fn set_importance(&mut self, importance: ButtonImportance) {
        self.importance = importance;
        self.refresh();
    }

    pub fn alignment(&self) -> ButtonAlign {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: ButtonAlign) {
        self.alignment = alignment;
        self.refresh();
    }

    pub fn icon_placement(&self) -> ButtonIconPlacement {
        self.icon_placement
    }

    pub fn set_icon_placement(&mut self, placement: ButtonIconPlacement) {
        self.icon_placement = placement;
        self.refresh();
    }

    pub fn colors(&self) -> ButtonColors {
        self.colors
    }

    pub fn set_colors(&mut self, colors: ButtonColors) {
        self.colors = colors;
        self.refresh();
    }

    pub fn set_on_tapped(&mut self, tapped: impl FnMut() + 'static) {
        self.on_tapped = Some(Box::new(tapped));
    }

    /// Replace the tap ripple animation (duration and easing)
    pub fn set_tap_animation(&mut self, animation: Animation) {
        self.tap_anim = animation;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn enable(&mut self) {
        self.disabled = false;
        self.refresh();
    }

    pub fn disable(&mut self) {
        self.disabled = true;
        self.refresh();
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn show(&mut self) {
        self.hidden = false;
        self.refresh();
    }

    pub fn hide(&mut self) {
        self.hidden = true;
        self.refresh();
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Most significant visual state
    pub fn state(&self) -> WidgetState {
        if self.disabled {
            WidgetState::Disabled
        } else if self.focused {
            WidgetState::Focused
        } else if self.hovered {
            WidgetState::Hovered
        } else {
            WidgetState::Normal
        }
    }

    // --- Canvas objects ---

    pub fn background(&self) -> &Rectangle {
        &self.background
    }

    pub fn tap_background(&self) -> &Rectangle {
        &self.tap_bg
    }

    pub fn label(&self) -> &Text {
        &self.label
    }

    pub fn icon_image(&self) -> Option<&Image> {
        self.icon_image.as_ref()
    }

    pub fn shadow(&self) -> &Shadow {
        &self.shadow
    }

    // --- Input ---

    /// Pointer tap; ignored while disabled
    pub fn tapped(&mut self) {
        self.tapped_at(Instant::now());
    }

    /// Pointer tap with the animation clock at `now`
    pub fn tapped_at(&mut self, now: Instant) {
        if self.disabled {
            return;
        }

        crate::log!("CmButton '{}' tapped", self.text);
        self.tap_animation(now);
        self.refresh();

        if let Some(on_tapped) = self.on_tapped.as_mut() {
            on_tapped();
        }
    }

    /// Space activates a focused button
    pub fn typed_key(&mut self, key: KeyName) {
        if key == KeyName::Space {
            self.tapped();
        }
    }

    pub fn typed_rune(&mut self, _rune: char) {}

    pub fn mouse_in(&mut self) {
        self.hovered = true;
        self.refresh();
    }

    pub fn mouse_moved(&mut self) {}

    pub fn mouse_out(&mut self) {
        self.hovered = false;
        self.refresh();
    }

    pub fn focus_gained(&mut self) {
        self.focused = true;
        self.refresh();
    }

    pub fn focus_lost(&mut self) {
        self.focused = false;
        self.refresh();
    }

    pub fn cursor(&self) -> Cursor {
        Cursor::Default
    }

    // --- Tap animation ---

    fn tap_animation(&mut self, now: Instant) {
        self.tap_anim.stop();
        self.tap_anim.start_at(now);
        self.apply_tap_frame(0.0);
    }

    /// Advance the tap ripple; returns true while it is still running
    pub fn animate(&mut self, now: Instant) -> bool {
        if !self.tap_anim.is_started() {
            return false;
        }

        self.apply_tap_frame(self.tap_anim.value_at(now));
        let running = self.tap_anim.is_running_at(now);
        if !running {
            self.tap_anim.stop();
        }
        running
    }

    pub fn is_animating(&self) -> bool {
        self.tap_anim.is_started()
    }

    /// Ripple grows from the centre while the pressed color fades out
    fn apply_tap_frame(&mut self, done: f32) {
        let mid = self.size.width / 2.0;
        let half = mid * done;
        self.tap_bg.resize(Size::new(half * 2.0, self.size.height));
        self.tap_bg.move_to(Position::new(mid - half, 0.0));

        let pressed = self.theme.color(ColorName::Pressed);
        let fade = pressed.a - pressed.a * done;
        self.tap_bg.fill_color = if fade > 0.0 {
            pressed.with_alpha(fade)
        } else {
            Color::TRANSPARENT
        };
    }

    // --- Rendering state ---

    /// Re-apply theme colors and recompute geometry
    pub fn refresh(&mut self) {
        let padding = self.theme.padding();
        self.label.inset = Size::square(padding * 2.0);
        self.label.text = self.text.clone();
        self.label.measured = self.theme.measure_text(&self.text, self.theme.text_size());

        self.update_icon_and_text();
        self.apply_theme();
        self.layout_objects(self.size);
    }

    fn update_icon_and_text(&mut self) {
        match &self.icon {
            Some(resource) if !self.hidden => {
                let image = self
                    .icon_image
                    .get_or_insert_with(|| Image::from_resource(resource.clone()));
                image.resource = resource.clone();
                image.hidden = false;
            }
            _ => {
                if let Some(image) = self.icon_image.as_mut() {
                    image.hidden = true;
                }
            }
        }

        self.label.hidden = self.text.is_empty();
    }

    fn apply_theme(&mut self) {
        self.background.fill_color = self.button_color();

        self.label.color = if self.disabled {
            ColorName::Disabled
        } else if self.importance == ButtonImportance::High {
            ColorName::Background
        } else {
            ColorName::Foreground
        };

        if let Some(image) = self.icon_image.as_mut() {
            image.tint = if self.disabled {
                IconTint::Disabled
            } else if image.resource.themed && self.importance == ButtonImportance::High {
                IconTint::Inverted
            } else {
                IconTint::Original
            };
        }

        self.shadow.level = match self.importance {
            ButtonImportance::Low => ShadowLevel::Base,
            _ => ShadowLevel::Button,
        };
        self.shadow.color = self.theme.color(ColorName::Shadow);
    }

    /// Background fill for the current state
    pub fn button_color(&self) -> Color {
        let colors = &self.colors;
        if self.disabled {
            colors.disabled
        } else if self.focused {
            colors.enabled.blend_under(&colors.focused)
        } else if self.hovered {
            let bg = if self.importance == ButtonImportance::High {
                colors.primary
            } else {
                colors.enabled
            };
            bg.blend_under(&colors.hover)
        } else if self.importance == ButtonImportance::High {
            colors.primary
        } else {
            colors.enabled
        }
    }

    /// Space around the content: wider when there is text
    fn content_padding(&self) -> Size {
        let padding = self.theme.padding();
        if self.text.is_empty() {
            Size::new(padding * 4.0, padding * 4.0)
        } else {
            Size::new(padding * 6.0, padding * 4.0)
        }
    }

    fn has_icon(&self) -> bool {
        self.icon_image.as_ref().is_some_and(|image| image.visible())
    }

    fn layout_objects(&mut self, size: Size) {
        let padding = self.theme.padding();
        let (inset, bg_size) = if self.importance == ButtonImportance::Low {
            (Position::ORIGIN, size)
        } else {
            (
                Position::new(padding / 2.0, padding / 2.0),
                size - Size::square(padding),
            )
        };
        self.shadow.layout(inset, bg_size);
        self.background.move_to(inset);
        self.background.resize(bg_size);

        let has_icon = self.has_icon();
        let has_label = !self.text.is_empty();
        if !has_icon && !has_label {
            return;
        }

        let icon_size = Size::square(self.theme.icon_inline_size());
        let label_size = self.label.min_size();
        let content_padding = self.content_padding();

        match (has_label, self.icon_image.as_mut().filter(|_| has_icon)) {
            (true, Some(icon)) => {
                icon.set_min_size(icon_size);
                let label = &mut self.label;
                let mut objects: Vec<&mut dyn CanvasObject> = match self.icon_placement {
                    ButtonIconPlacement::LeadingText => vec![icon, label],
                    ButtonIconPlacement::TrailingText => vec![label, icon],
                };
                let min = self.layout.min_size(&objects);
                self.layout.layout(&mut objects, min);
                drop(objects);

                let pos = aligned_position(self.alignment, content_padding, min, size);
                self.label.position = self.label.position + pos;
                if let Some(icon) = self.icon_image.as_mut() {
                    icon.position = icon.position + pos;
                }
            }
            (true, None) => {
                self.label.move_to(aligned_position(
                    self.alignment,
                    content_padding,
                    label_size,
                    size,
                ));
                self.label.resize(label_size);
            }
            (false, Some(icon)) => {
                icon.move_to(aligned_position(
                    self.alignment,
                    content_padding,
                    icon_size,
                    size,
                ));
                icon.resize(icon_size);
            }
            (false, None) => {}
        }
    }

    /// Smallest size that fits label, icon and padding
    fn content_min_size(&self) -> Size {
        let has_icon = self.has_icon();
        let has_label = !self.text.is_empty();
        let icon_size = Size::square(self.theme.icon_inline_size());
        let label_size = self.label.min_size();

        let mut size = Size::ZERO;
        if has_label {
            size.width = label_size.width;
        }
        if has_icon {
            if has_label {
                size.width += self.theme.padding();
            }
            size.width += icon_size.width;
        }
        size.height = label_size.height.max(icon_size.height);
        size + self.content_padding()
    }
}

impl CanvasObject for CmButton {
    fn visible(&self) -> bool {
        !self.hidden
    }

    fn min_size(&self) -> Size {
        self.content_min_size()
    }

    fn move_to(&mut self, pos: Position) {
        self.position = pos;
    }

    fn resize(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        self.size = size;
        self.layout_objects(size);
    }
}
