//! Breadcrumb trail model.

#[cfg(test)]
#[path = "breadcrumb_test.rs"]
mod breadcrumb_test;

use crate::action::LayoutAction;

/// What clicking a breadcrumb step does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BreadcrumbTarget {
    Path(String),
    Action(LayoutAction),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub target: Option<BreadcrumbTarget>,
}

impl BreadcrumbItem {
    #[must_use]
    pub fn new(label: impl Into<String>, target: Option<BreadcrumbTarget>) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }
}

/// Result of clicking a non-terminal step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BreadcrumbEvent {
    Navigate(String),
    Action(LayoutAction),
}

/// Resolve a click on step `index`. The last step is the current location and
/// never fires.
#[must_use]
pub fn resolve_click(items: &[BreadcrumbItem], index: usize) -> Option<BreadcrumbEvent> {
    if index >= items.len().saturating_sub(1) {
        return None;
    }
    match items.get(index)?.target.as_ref()? {
        BreadcrumbTarget::Path(path) => Some(BreadcrumbEvent::Navigate(path.clone())),
        BreadcrumbTarget::Action(action) => Some(BreadcrumbEvent::Action(action.clone())),
    }
}

/// Trail shown above the creator: Home / Projects / current project.
#[must_use]
pub fn creator_trail(project_name: &str) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem::new("Home", Some(BreadcrumbTarget::Action(LayoutAction::Back))),
        BreadcrumbItem::new("Projects", Some(BreadcrumbTarget::Path("/".to_owned()))),
        BreadcrumbItem::new(project_name, None),
    ]
}
