use std::time::Duration;

use roster_business::user_management::{advance_updates, sync_location};
use roster_business::{Router, USER_MANAGEMENT_BASE};

use crate::{state::State, widgets};

/// Repaint interval while commands are still running.
const PENDING_REPAINT: Duration = Duration::from_millis(100);

pub struct RosterApp {
    pub state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply command results, then reconcile the URL before drawing.
        self.state.ctx.sync_computes();
        sync_location(&mut self.state.ctx);
        advance_updates(&mut self.state.ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            widgets::nav_bar(&mut self.state.ctx, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let on_users_screen = self.state.ctx.state::<Router>().location().pathname
                    == USER_MANAGEMENT_BASE;
                if on_users_screen {
                    widgets::users_panel(&mut self.state.ctx, ui);
                } else {
                    widgets::route_placeholder(&mut self.state.ctx, ui);
                }

                ui.separator();
                widgets::checkbox_demo(&mut self.state.ctx, ui);
            });
        });

        // Spawn whatever this frame enqueued.
        self.state.ctx.flush_commands();
        if self.state.ctx.task_count() > 0 {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}
