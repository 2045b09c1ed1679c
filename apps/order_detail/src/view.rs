//! Terminal rendering of the page: alerts go to stdout, modal changes to the log.

use tracing::info;

use crate::controller::{ModalOptions, PageView};

pub struct TerminalView;

impl PageView for TerminalView {
    fn alert(&self, message: &str) {
        println!("{message}");
    }

    fn show_modal(&self, options: ModalOptions) {
        info!(
            static_backdrop = options.static_backdrop,
            keyboard = options.keyboard,
            "rating modal shown"
        );
    }

    fn hide_modal(&self) {
        info!("rating modal hidden");
    }
}
