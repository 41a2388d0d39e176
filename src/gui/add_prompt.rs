//! Add Stock Prompt
//! Single-line input for a new ticker symbol.

use egui::RichText;

/// Small window asking for a ticker. Enter submits, Escape cancels.
#[derive(Default)]
pub struct AddPrompt {
    open: bool,
    input: String,
}

impl AddPrompt {
    pub fn open(&mut self) {
        self.open = true;
        self.input.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context) -> AddPromptAction {
        if !self.open {
            return AddPromptAction::None;
        }

        let mut action = AddPromptAction::None;

        egui::Window::new("Add Stock")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("Enter stock ticker:").size(13.0));
                let response = ui.text_edit_singleline(&mut self.input);
                response.request_focus();

                let (enter, escape) = ui.input(|i| {
                    (
                        i.key_pressed(egui::Key::Enter),
                        i.key_pressed(egui::Key::Escape),
                    )
                });

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || enter {
                        action = AddPromptAction::Submit(self.input.clone());
                    }
                    if ui.button("Cancel").clicked() || escape {
                        action = AddPromptAction::Cancel;
                    }
                });
            });

        if action != AddPromptAction::None {
            self.open = false;
        }
        action
    }
}

/// Outcome of one frame of the prompt
#[derive(Debug, Clone, PartialEq)]
pub enum AddPromptAction {
    None,
    Submit(String),
    Cancel,
}
