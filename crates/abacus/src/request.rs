//! What to draw: one request type per figure.
//!
//! Requests hold the raw integers a caller supplied. Nothing is rejected
//! here: each figure normalizes its request (clamping counts, fixing a zero
//! group size, and so on) when it is built.

use std::{fmt, str::FromStr};

use log::warn;

/// A request for one figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramRequest {
    NumberLine(NumberLineRequest),
    Array(ArrayRequest),
    Grouping(GroupingRequest),
    Combine(CombineRequest),
}

impl DiagramRequest {
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::NumberLine(request) => request.title(),
            Self::Array(request) => request.title(),
            Self::Grouping(request) => request.title(),
            Self::Combine(request) => request.title(),
        }
    }
}

impl From<NumberLineRequest> for DiagramRequest {
    fn from(request: NumberLineRequest) -> Self {
        Self::NumberLine(request)
    }
}

impl From<ArrayRequest> for DiagramRequest {
    fn from(request: ArrayRequest) -> Self {
        Self::Array(request)
    }
}

impl From<GroupingRequest> for DiagramRequest {
    fn from(request: GroupingRequest) -> Self {
        Self::Grouping(request)
    }
}

impl From<CombineRequest> for DiagramRequest {
    fn from(request: CombineRequest) -> Self {
        Self::Combine(request)
    }
}

/// Hops along a number line, starting at `origin`.
///
/// # Examples
///
/// ```
/// # use abacus::request::NumberLineRequest;
/// let request = NumberLineRequest::new(7, vec![1; 5]).with_title("7 + 5");
/// assert_eq!(request.jumps().len(), 5);
/// assert_eq!(request.tick_min(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLineRequest {
    origin: i64,
    jumps: Vec<i64>,
    tick_min: Option<i64>,
    tick_max: Option<i64>,
    title: Option<String>,
}

impl NumberLineRequest {
    pub fn new(origin: i64, jumps: Vec<i64>) -> Self {
        Self {
            origin,
            jumps,
            tick_min: None,
            tick_max: None,
            title: None,
        }
    }

    /// Fixes the lowest tick instead of deriving it from the positions.
    pub fn with_tick_min(mut self, tick_min: i64) -> Self {
        self.tick_min = Some(tick_min);
        self
    }

    /// Fixes the highest tick instead of deriving it from the positions.
    pub fn with_tick_max(mut self, tick_max: i64) -> Self {
        self.tick_max = Some(tick_max);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn origin(&self) -> i64 {
        self.origin
    }

    pub fn jumps(&self) -> &[i64] {
        &self.jumps
    }

    pub fn tick_min(&self) -> Option<i64> {
        self.tick_min
    }

    pub fn tick_max(&self) -> Option<i64> {
        self.tick_max
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// A grid of `rows` × `cols` cells, the first `fill_until` of them colored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayRequest {
    rows: i64,
    cols: i64,
    fill_until: Option<i64>,
    title: Option<String>,
}

impl ArrayRequest {
    pub fn new(rows: i64, cols: i64) -> Self {
        Self {
            rows,
            cols,
            fill_until: None,
            title: None,
        }
    }

    /// Colors only the first `fill_until` cells, in reading order.
    pub fn with_fill_until(mut self, fill_until: i64) -> Self {
        self.fill_until = Some(fill_until);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn rows(&self) -> i64 {
        self.rows
    }

    pub fn cols(&self) -> i64 {
        self.cols
    }

    pub fn fill_until(&self) -> Option<i64> {
        self.fill_until
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// `total` items split into groups of `group_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingRequest {
    total: i64,
    group_size: i64,
    step_groups: Option<i64>,
    items_per_row: Option<i64>,
    title: Option<String>,
}

impl GroupingRequest {
    pub fn new(total: i64, group_size: i64) -> Self {
        Self {
            total,
            group_size,
            step_groups: None,
            items_per_row: None,
            title: None,
        }
    }

    /// Colors only the first `step_groups` complete groups.
    pub fn with_step_groups(mut self, step_groups: i64) -> Self {
        self.step_groups = Some(step_groups);
        self
    }

    pub fn with_items_per_row(mut self, items_per_row: i64) -> Self {
        self.items_per_row = Some(items_per_row);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn group_size(&self) -> i64 {
        self.group_size
    }

    pub fn step_groups(&self) -> Option<i64> {
        self.step_groups
    }

    pub fn items_per_row(&self) -> Option<i64> {
        self.items_per_row
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Whether the second set of dots is added to or taken from the first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotsMode {
    #[default]
    Add,
    Subtract,
}

impl DotsMode {
    /// Reads a mode name, falling back to [`DotsMode::Add`] for anything
    /// other than `add` or `subtract`.
    pub fn parse_lenient(mode: &str) -> Self {
        mode.parse().unwrap_or_else(|_| {
            warn!(mode; "Unknown dots mode, falling back to add");
            Self::Add
        })
    }
}

impl FromStr for DotsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            _ => Err(format!(
                "invalid dots mode `{s}`, valid values: add, subtract"
            )),
        }
    }
}

impl fmt::Display for DotsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Subtract => write!(f, "subtract"),
        }
    }
}

/// Two sets of dots, combined or with the second taken away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineRequest {
    count_a: i64,
    count_b: i64,
    mode: DotsMode,
    items_per_row: Option<i64>,
    title: Option<String>,
}

impl CombineRequest {
    pub fn new(count_a: i64, count_b: i64, mode: DotsMode) -> Self {
        Self {
            count_a,
            count_b,
            mode,
            items_per_row: None,
            title: None,
        }
    }

    pub fn with_items_per_row(mut self, items_per_row: i64) -> Self {
        self.items_per_row = Some(items_per_row);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn count_a(&self) -> i64 {
        self.count_a
    }

    pub fn count_b(&self) -> i64 {
        self.count_b
    }

    pub fn mode(&self) -> DotsMode {
        self.mode
    }

    pub fn items_per_row(&self) -> Option<i64> {
        self.items_per_row
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
