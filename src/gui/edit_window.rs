//! Edit Window Widget
//! Per-ticker reorder and delete controls.

use crate::data::Ticker;
use egui::{Color32, RichText, ScrollArea};

const ARROW_COLOR: Color32 = Color32::from_rgb(62, 62, 62);
const DELETE_COLOR: Color32 = Color32::from_rgb(255, 87, 34);

/// Window listing the watchlist with up/down/delete buttons per row.
pub struct EditWindow {
    size: [f32; 2],
}

impl EditWindow {
    pub fn new(size: [f32; 2]) -> Self {
        Self { size }
    }

    pub fn show(&self, ctx: &egui::Context, tickers: &[Ticker]) -> EditAction {
        let mut action = EditAction::None;
        let mut open = true;

        egui::Window::new("Edit Stocks")
            .open(&mut open)
            .collapsible(false)
            .default_size(self.size)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .max_height(self.size[1] - 60.0)
                    .show(ui, |ui| {
                        if tickers.is_empty() {
                            ui.label(RichText::new("Watchlist is empty").color(Color32::GRAY));
                        }

                        for (index, ticker) in tickers.iter().enumerate() {
                            if let Some(row_action) = Self::draw_row(ui, index, ticker) {
                                action = row_action;
                            }
                            ui.separator();
                        }
                    });

                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Done").clicked() {
                        action = EditAction::Close;
                    }
                });
            });

        if !open {
            action = EditAction::Close;
        }
        action
    }

    fn draw_row(ui: &mut egui::Ui, index: usize, ticker: &Ticker) -> Option<EditAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            let up = egui::Button::new(RichText::new("↑").color(Color32::WHITE))
                .fill(ARROW_COLOR)
                .min_size(egui::vec2(22.0, 22.0));
            if ui.add(up).clicked() {
                action = Some(EditAction::MoveUp(index));
            }

            let down = egui::Button::new(RichText::new("↓").color(Color32::WHITE))
                .fill(ARROW_COLOR)
                .min_size(egui::vec2(22.0, 22.0));
            if ui.add(down).clicked() {
                action = Some(EditAction::MoveDown(index));
            }

            ui.add_space(10.0);
            ui.label(RichText::new(ticker.as_str()).size(14.0));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let delete = egui::Button::new(RichText::new("Delete").color(Color32::WHITE))
                    .fill(DELETE_COLOR);
                if ui.add(delete).clicked() {
                    action = Some(EditAction::Delete(index));
                }
            });
        });

        action
    }
}

/// Actions triggered from the edit window
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    None,
    MoveUp(usize),
    MoveDown(usize),
    Delete(usize),
    Close,
}
