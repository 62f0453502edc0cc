//! Output surfaces the renderer writes into.
//!
//! A surface exposes named cells. Renderers never look cells up by name
//! while drawing: a [`SlotBinding`] resolves every cell of a slot once and
//! the renderer writes through the handles it holds. Cells the surface does
//! not have are left unbound and skipped.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::constants::FORECAST_DAYS;
use crate::icons::WeatherIcon;

/// Opaque reference to a cell obtained from [`ForecastSurface::cell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellHandle(String);

pub trait ForecastSurface {
    /// Looks up a cell by identifier.
    fn cell(&self, id: &str) -> Option<CellHandle>;

    fn set_text(&mut self, cell: &CellHandle, text: &str);

    fn set_icon(&mut self, cell: &CellHandle, icon: WeatherIcon) {
        self.set_text(cell, icon.label());
    }

    /// Makes the results area visible.
    fn reveal_results(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RenderSlot {
    First,
    Second,
}

impl RenderSlot {
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    pub fn id(self) -> &'static str {
        match self {
            Self::First => "city1",
            Self::Second => "city2",
        }
    }

    pub fn label_id(self) -> String {
        format!("{}.name", self.id())
    }

    pub fn cell_id(self, day: usize, field: DayField) -> String {
        format!("{}.day{}.{}", self.id(), day, field.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayField {
    Weekday,
    High,
    Low,
    Precipitation,
    Outlook,
}

impl DayField {
    pub const ALL: [Self; 5] = [
        Self::Weekday,
        Self::High,
        Self::Low,
        Self::Precipitation,
        Self::Outlook,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekday => "weekday",
            Self::High => "high",
            Self::Low => "low",
            Self::Precipitation => "precip",
            Self::Outlook => "outlook",
        }
    }
}

/// Cells of one forecast row.
#[derive(Debug, Clone, Default)]
pub struct RowBinding {
    pub weekday: Option<CellHandle>,
    pub high: Option<CellHandle>,
    pub low: Option<CellHandle>,
    pub precipitation: Option<CellHandle>,
    pub outlook: Option<CellHandle>,
}

/// All cells of a render slot, resolved once from a surface.
#[derive(Debug, Clone)]
pub struct SlotBinding {
    pub slot: RenderSlot,
    pub label: Option<CellHandle>,
    pub rows: Vec<RowBinding>,
}

impl SlotBinding {
    pub fn bind<S: ForecastSurface + ?Sized>(slot: RenderSlot, surface: &S) -> Self {
        let rows = (0..FORECAST_DAYS)
            .map(|day| RowBinding {
                weekday: surface.cell(&slot.cell_id(day, DayField::Weekday)),
                high: surface.cell(&slot.cell_id(day, DayField::High)),
                low: surface.cell(&slot.cell_id(day, DayField::Low)),
                precipitation: surface.cell(&slot.cell_id(day, DayField::Precipitation)),
                outlook: surface.cell(&slot.cell_id(day, DayField::Outlook)),
            })
            .collect();

        Self {
            slot,
            label: surface.cell(&slot.label_id()),
            rows,
        }
    }
}

/// In-memory surface drawn as markdown tables, one per slot.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    slots: Vec<RenderSlot>,
    cells: BTreeMap<String, String>,
    results_visible: bool,
}

impl TableView {
    /// A view with the full cell layout for each of `slots`.
    pub fn new(slots: &[RenderSlot]) -> Self {
        let mut cells = BTreeMap::new();
        for &slot in slots {
            cells.insert(slot.label_id(), String::new());
            for day in 0..FORECAST_DAYS {
                for field in DayField::ALL {
                    cells.insert(slot.cell_id(day, field), String::new());
                }
            }
        }

        Self {
            slots: slots.to_vec(),
            cells,
            results_visible: false,
        }
    }

    /// Removes a cell from the layout.
    pub fn without_cell(mut self, id: &str) -> Self {
        self.cells.remove(id);
        self
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.cells.get(id).map(String::as_str)
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    fn column(&self, slot: RenderSlot, day: usize, field: DayField) -> &str {
        self.text(&slot.cell_id(day, field)).unwrap_or_default()
    }

    /// Markdown rendering of the results area; empty while hidden.
    pub fn to_markdown(&self) -> String {
        if !self.results_visible {
            return String::new();
        }

        let mut output = String::new();
        for &slot in &self.slots {
            let label = self.text(&slot.label_id()).unwrap_or(slot.id());
            let _ = writeln!(output, "### {label}\n");
            output.push_str("| Day | High | Low | Precipitation | Outlook |\n");
            output.push_str("|-----|------|-----|---------------|---------|\n");
            for day in 0..FORECAST_DAYS {
                let row: Vec<&str> = DayField::ALL
                    .iter()
                    .map(|&field| self.column(slot, day, field))
                    .collect();
                let _ = writeln!(output, "| {} |", row.join(" | "));
            }
            output.push('\n');
        }
        output
    }
}

impl ForecastSurface for TableView {
    fn cell(&self, id: &str) -> Option<CellHandle> {
        self.cells
            .contains_key(id)
            .then(|| CellHandle(id.to_string()))
    }

    fn set_text(&mut self, cell: &CellHandle, text: &str) {
        if let Some(value) = self.cells.get_mut(&cell.0) {
            value.clear();
            value.push_str(text);
        }
    }

    fn reveal_results(&mut self) {
        self.results_visible = true;
    }
}
