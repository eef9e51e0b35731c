//! Rendered element tree.
//!
//! Views render into a flat [`Frame`] of [`Element`]s. Elements are found by
//! `data-testid` (the automation contract), by element id, or by text.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Container,
    Text,
    Button,
    Link,
    Input,
    Radio,
    Checkbox,
    Spinner,
    Image,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub test_id: Option<String>,
    /// DOM id, for the few controls that have no test id.
    pub id: Option<String>,
    pub text: String,
    pub visible: bool,
    pub enabled: bool,
    /// Current value of inputs; checked state of radios and checkboxes.
    pub value: Option<String>,
    /// Numeric layout hints (image size, padding, offsets).
    pub width: Option<f64>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            test_id: None,
            id: None,
            text: String::new(),
            visible: true,
            enabled: true,
            value: None,
            width: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Text).with_text(text)
    }

    pub fn button(test_id: &str, text: impl Into<String>) -> Self {
        Self::new(ElementKind::Button)
            .with_test_id(test_id)
            .with_text(text)
    }

    pub fn input(test_id: &str, value: &str) -> Self {
        Self::new(ElementKind::Input)
            .with_test_id(test_id)
            .with_value(value)
    }

    pub fn with_test_id(mut self, test_id: &str) -> Self {
        self.test_id = Some(test_id.to_string());
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn checked(self, checked: bool) -> Self {
        self.with_value(if checked { "true" } else { "false" })
    }

    pub fn is_checked(&self) -> bool {
        self.value.as_deref() == Some("true")
    }
}

/// One rendered screen (or modal layer).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    elements: Vec<Element>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Append another frame's elements (modal layers, sub-views).
    pub fn extend(&mut self, other: Frame) {
        self.elements.extend(other.elements);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn by_test_id(&self, test_id: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.test_id.as_deref() == Some(test_id))
    }

    pub fn all_by_test_id<'a>(&'a self, test_id: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements
            .iter()
            .filter(move |e| e.test_id.as_deref() == Some(test_id))
    }

    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id.as_deref() == Some(id))
    }

    /// Visible element whose text contains `needle`.
    pub fn by_text(&self, needle: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.visible && e.text.contains(needle))
    }

    /// Exact-text match, like `getByText(.., { exact: true })`.
    pub fn by_exact_text(&self, text: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.visible && e.text == text)
    }

    pub fn is_visible(&self, test_id: &str) -> bool {
        self.by_test_id(test_id).is_some_and(|e| e.visible)
    }

    pub fn is_enabled(&self, test_id: &str) -> bool {
        self.by_test_id(test_id).is_some_and(|e| e.visible && e.enabled)
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.by_text(needle).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_elements_do_not_match_text() {
        let mut frame = Frame::new();
        frame.push(Element::text("Shown"));
        frame.push(Element::text("Hidden").visible(false));
        assert!(frame.has_text("Shown"));
        assert!(!frame.has_text("Hidden"));
    }

    #[test]
    fn disabled_button_is_visible_but_not_enabled() {
        let mut frame = Frame::new();
        frame.push(Element::button("confirm-button", "Confirm").enabled(false));
        assert!(frame.is_visible("confirm-button"));
        assert!(!frame.is_enabled("confirm-button"));
        assert!(!frame.is_visible("missing"));
    }
}
