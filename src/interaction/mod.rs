//! Axis-selection state machine and hover tracking.
//!
//! The controller has a single idle state. A label click either leaves the
//! selection as is or swaps one axis' metric; everything else (rescaling,
//! animation, label classes) is derived from the resulting selection.

use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisChoice, Metric, XMetric, YMetric};

/// Metrics currently plotted on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AxisSelection {
    pub x: XMetric,
    pub y: YMetric,
}

impl AxisSelection {
    #[must_use]
    pub const fn new(x: XMetric, y: YMetric) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn metric(self, axis: Axis) -> Metric {
        match axis {
            Axis::X => self.x.into(),
            Axis::Y => self.y.into(),
        }
    }

    #[must_use]
    pub fn with_choice(self, choice: AxisChoice) -> Self {
        match choice {
            AxisChoice::X(x) => Self { x, ..self },
            AxisChoice::Y(y) => Self { y, ..self },
        }
    }

    /// `true` when `choice` names the metric already selected on its axis.
    #[must_use]
    pub fn is_selected(self, choice: AxisChoice) -> bool {
        match choice {
            AxisChoice::X(x) => self.x == x,
            AxisChoice::Y(y) => self.y == y,
        }
    }
}

/// Result of feeding one label click through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// The clicked label was already active; nothing to redraw.
    Unchanged,
    /// One axis switched metric.
    Changed {
        axis: Axis,
        previous: Metric,
        selection: AxisSelection,
    },
}

impl ClickOutcome {
    #[must_use]
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Pure transition function of the idle state.
#[must_use]
pub fn handle_label_click(selection: AxisSelection, choice: AxisChoice) -> ClickOutcome {
    if selection.is_selected(choice) {
        return ClickOutcome::Unchanged;
    }

    let axis = choice.axis();
    ClickOutcome::Changed {
        axis,
        previous: selection.metric(axis),
        selection: selection.with_choice(choice),
    }
}

/// Visual state of one clickable axis label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelClass {
    Active,
    Inactive,
}

impl LabelClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Classes for `axis`'s label group, in drawing order.
///
/// Exactly one entry is `Active`: the one matching the selection.
#[must_use]
pub fn label_classes(selection: AxisSelection, axis: Axis) -> [(Metric, LabelClass); 3] {
    let selected = selection.metric(axis);
    Metric::for_axis(axis).map(|metric| {
        let class = if metric == selected {
            LabelClass::Active
        } else {
            LabelClass::Inactive
        };
        (metric, class)
    })
}

/// Monotonic id attached to each axis change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Tracks the latest issued request per axis.
///
/// An animation may only commit its end state while its id is still the
/// latest for its axis; anything older has been superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestLedger {
    next: u64,
    latest_x: Option<RequestId>,
    latest_y: Option<RequestId>,
}

impl RequestLedger {
    pub fn issue(&mut self, axis: Axis) -> RequestId {
        self.next += 1;
        let id = RequestId(self.next);
        match axis {
            Axis::X => self.latest_x = Some(id),
            Axis::Y => self.latest_y = Some(id),
        }
        id
    }

    #[must_use]
    pub fn latest(self, axis: Axis) -> Option<RequestId> {
        match axis {
            Axis::X => self.latest_x,
            Axis::Y => self.latest_y,
        }
    }

    #[must_use]
    pub fn is_current(self, axis: Axis, id: RequestId) -> bool {
        self.latest(axis) == Some(id)
    }
}

/// Selection, hover and request bookkeeping owned by the chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    selection: AxisSelection,
    requests: RequestLedger,
    hovered: Option<usize>,
    cursor: Option<(f64, f64)>,
}

impl InteractionState {
    #[must_use]
    pub fn with_selection(selection: AxisSelection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn selection(self) -> AxisSelection {
        self.selection
    }

    #[must_use]
    pub fn requests(self) -> RequestLedger {
        self.requests
    }

    /// Applies a click and, when it changes the selection, issues a request id.
    pub fn on_label_click(&mut self, choice: AxisChoice) -> (ClickOutcome, Option<RequestId>) {
        let outcome = handle_label_click(self.selection, choice);
        match outcome {
            ClickOutcome::Unchanged => (outcome, None),
            ClickOutcome::Changed { axis, selection, .. } => {
                self.selection = selection;
                (outcome, Some(self.requests.issue(axis)))
            }
        }
    }

    #[must_use]
    pub fn hovered(self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.cursor
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, hit: Option<usize>) {
        self.cursor = Some((x, y));
        self.hovered = hit;
    }

    pub fn on_pointer_over(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.hovered = None;
    }
}
