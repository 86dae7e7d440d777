use egui::{Button, RichText, Ui};
use roster_business::{Router, USER_MANAGEMENT_BASE};
use roster_states::StateCtx;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavAction {
    Back,
    Forward,
    Home,
}

/// Back/forward buttons plus the current location.
pub fn nav_bar(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let router = state_ctx.state::<Router>();
    let can_go_back = router.can_go_back();
    let can_go_forward = router.can_go_forward();
    let href = router.location().href();

    let action = egui::MenuBar::new()
        .ui(ui, |ui| {
            let mut action = None;
            if ui
                .add_enabled(can_go_back, Button::new("◀"))
                .on_hover_text("Back")
                .clicked()
            {
                action = Some(NavAction::Back);
            }
            if ui
                .add_enabled(can_go_forward, Button::new("▶"))
                .on_hover_text("Forward")
                .clicked()
            {
                action = Some(NavAction::Forward);
            }
            if ui.button("User management").clicked() {
                action = Some(NavAction::Home);
            }
            ui.separator();
            ui.label(RichText::new(href.as_str()).monospace());
            action
        })
        .inner;

    match action {
        Some(NavAction::Back) => state_ctx.update::<Router>(|router| {
            router.back();
        }),
        Some(NavAction::Forward) => state_ctx.update::<Router>(|router| {
            router.forward();
        }),
        Some(NavAction::Home) => {
            state_ctx.update::<Router>(|router| router.push(USER_MANAGEMENT_BASE));
        }
        None => {}
    }
}

/// Stand-in for the user detail, edit, delete and create screens.
pub fn route_placeholder(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let pathname = state_ctx.state::<Router>().location().pathname.clone();
    ui.heading("Not available here");
    ui.label(format!("No screen is registered for {pathname}."));
    if ui.link("Back to users").clicked() {
        state_ctx.update::<Router>(|router| router.push(USER_MANAGEMENT_BASE));
    }
}
