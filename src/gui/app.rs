//! Stock Dashboard Main Application
//! Main window with the quote list, the add prompt and the edit window.

use crate::config::DashboardConfig;
use crate::dashboard::{Dashboard, DashboardError, Notice, NoticeLevel, View};
use crate::data::Direction;
use crate::gui::{AddPrompt, AddPromptAction, EditAction, EditWindow, MainAction, MainView};
use log::{error, info};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::time::Instant;

/// Main application window.
pub struct DashboardApp {
    dashboard: Dashboard,
    add_prompt: AddPrompt,
    edit_window: EditWindow,

    // Shown after the current frame's widgets are laid out
    notices: Vec<Notice>,
    // Set once the user confirmed quitting or after a fatal error
    allow_close: bool,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mut dashboard: Dashboard,
        config: &DashboardConfig,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        dashboard.start(Instant::now());

        Self {
            dashboard,
            add_prompt: AddPrompt::default(),
            edit_window: EditWindow::new(config.editor_size),
            notices: Vec::new(),
            allow_close: false,
        }
    }

    fn handle_main_action(&mut self, action: MainAction) {
        match action {
            MainAction::AddStock => self.add_prompt.open(),
            MainAction::Edit => self.dashboard.open_editor(),
            MainAction::None => {}
        }
    }

    fn handle_edit_action(&mut self, ctx: &egui::Context, action: EditAction) {
        let result = match action {
            EditAction::MoveUp(index) => self.dashboard.move_ticker(index, Direction::Up),
            EditAction::MoveDown(index) => self.dashboard.move_ticker(index, Direction::Down),
            EditAction::Delete(index) => self.dashboard.delete_ticker(index).map(|notice| {
                self.notices.extend(notice);
            }),
            EditAction::Close => {
                self.notices.extend(self.dashboard.close_editor(Instant::now()));
                Ok(())
            }
            EditAction::None => Ok(()),
        };

        if let Err(e) = result {
            self.abort(ctx, e);
        }
    }

    fn handle_add_action(&mut self, ctx: &egui::Context, action: AddPromptAction) {
        let AddPromptAction::Submit(input) = action else {
            return;
        };

        match self.dashboard.add_ticker(&input) {
            Ok(notice) => self.notices.extend(notice),
            Err(e) => self.abort(ctx, e),
        }
    }

    /// Intercept window close and ask before quitting
    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) || self.allow_close {
            return;
        }

        let confirmed = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("Quit")
            .set_description("Do you want to quit?")
            .set_buttons(MessageButtons::OkCancel)
            .show();

        if !matches!(confirmed, MessageDialogResult::Ok) {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            return;
        }

        if let Err(e) = self.dashboard.shutdown() {
            error!("{}", e);
            Self::show_notice(&Notice::error("Save Error", e.to_string()));
        }
        info!("Exiting");
        self.allow_close = true;
    }

    /// Persistence failures are unrecoverable: report and close.
    fn abort(&mut self, ctx: &egui::Context, err: DashboardError) {
        error!("{}", err);
        let message = format!("{}\n\nThe dashboard will close.", err);
        self.notices.push(Notice::error("Save Error", message));
        self.allow_close = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn show_notice(notice: &Notice) {
        let level = match notice.level {
            NoticeLevel::Info => MessageLevel::Info,
            NoticeLevel::Warning => MessageLevel::Warning,
            NoticeLevel::Error => MessageLevel::Error,
        };

        MessageDialog::new()
            .set_level(level)
            .set_title(notice.title.as_str())
            .set_description(notice.message.as_str())
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Timer-driven refresh
        let now = Instant::now();
        self.notices.extend(self.dashboard.tick(now));
        if let Some(wait) = self.dashboard.time_until_refresh(now) {
            ctx.request_repaint_after(wait);
        }

        let editing = self.dashboard.view() == View::Edit;
        let interactive = !editing && !self.add_prompt.is_open();

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.add_enabled_ui(interactive, |ui| MainView::show(ui, self.dashboard.rows()))
                    .inner
            })
            .inner;
        self.handle_main_action(action);

        if self.dashboard.view() == View::Edit {
            let action = self.edit_window.show(ctx, self.dashboard.tickers());
            self.handle_edit_action(ctx, action);
        }

        let action = self.add_prompt.show(ctx);
        self.handle_add_action(ctx, action);

        self.handle_close_request(ctx);

        for notice in self.notices.drain(..) {
            Self::show_notice(&notice);
        }
    }
}
