use crate::config::Config;
use crate::core::store::EventStore;
use crate::ui::display_data::{CONFIG_HEADERS, DisplayDataBuilder, EVENT_HEADERS};
use crate::ui::table_printer::TablePrinter;
use chrono::NaiveDate;
use std::io::{self, Write};

#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub data: DisplayDataBuilder,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_events<W: Write>(
        &self,
        store: &EventStore,
        today: NaiveDate,
        show_past: bool,
        out: &mut W,
    ) -> io::Result<()> {
        let rows = self.data.event_rows(store, today, show_past);
        let empty = if store.is_empty() {
            "No events yet. Add one with: event \"<name>\" <date>"
        } else {
            "No upcoming events."
        };
        self.printer
            .render_table("Countdowns", &EVENT_HEADERS, &rows, empty, out)
    }

    pub fn display_events(&self, store: &EventStore, today: NaiveDate, show_past: bool) {
        let _ = self.render_events(store, today, show_past, &mut io::stdout());
    }

    pub fn render_config<W: Write>(&self, config: &Config, out: &mut W) -> io::Result<()> {
        let rows = self.data.config_rows(config);
        self.printer.render_table(
            "Config",
            &CONFIG_HEADERS,
            &rows,
            "No config items found.",
            out,
        )
    }

    pub fn display_config(&self, config: &Config) {
        let _ = self.render_config(config, &mut io::stdout());
    }
}
