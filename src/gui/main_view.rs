//! Main View Widget
//! Add/Edit toolbar above a scrollable list of quote rows.

use crate::dashboard::QuoteRow;
use egui::{Color32, RichText, ScrollArea};

const ADD_COLOR: Color32 = Color32::from_rgb(76, 175, 80);
const EDIT_COLOR: Color32 = Color32::from_rgb(255, 87, 34);
const TICKER_COLOR: Color32 = Color32::from_rgb(0, 0, 255);
const GAIN_COLOR: Color32 = Color32::from_rgb(0, 128, 0);
const LOSS_COLOR: Color32 = Color32::from_rgb(220, 20, 20);
const ROW_HEIGHT: f32 = 22.0;

/// Ticker, price and colored change for every fetched quote.
pub struct MainView;

impl MainView {
    /// Draw the toolbar and rows
    pub fn show(ui: &mut egui::Ui, rows: &[QuoteRow]) -> MainAction {
        let mut action = MainAction::None;

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let add = egui::Button::new(
                    RichText::new("Add Stock").size(14.0).color(Color32::WHITE),
                )
                .fill(ADD_COLOR);
                if ui.add(add).clicked() {
                    action = MainAction::AddStock;
                }

                ui.add_space(10.0);

                let edit =
                    egui::Button::new(RichText::new("Edit").size(14.0).color(Color32::WHITE))
                        .fill(EDIT_COLOR);
                if ui.add(edit).clicked() {
                    action = MainAction::Edit;
                }
            });
        });
        ui.add_space(10.0);

        egui::Frame::none()
            .fill(Color32::WHITE)
            .stroke(egui::Stroke::new(1.0, Color32::LIGHT_GRAY))
            .rounding(4.0)
            .inner_margin(6.0)
            .show(ui, |ui| {
                if rows.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new("No stocks yet").color(Color32::GRAY));
                    });
                    return;
                }

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show_rows(ui, ROW_HEIGHT, rows.len(), |ui, row_range| {
                        for row in &rows[row_range] {
                            Self::draw_row(ui, row);
                        }
                    });
            });

        action
    }

    fn draw_row(ui: &mut egui::Ui, row: &QuoteRow) {
        let change_color = if row.quote.is_gain() {
            GAIN_COLOR
        } else {
            LOSS_COLOR
        };

        ui.horizontal(|ui| {
            ui.set_height(ROW_HEIGHT);
            ui.label(
                RichText::new(row.ticker.as_str())
                    .size(13.0)
                    .strong()
                    .color(TICKER_COLOR),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(row.quote.format_change())
                        .size(13.0)
                        .strong()
                        .color(change_color),
                );
                ui.label(
                    RichText::new(row.quote.format_price())
                        .size(13.0)
                        .color(Color32::BLACK),
                );
            });
        });
    }
}

/// Actions triggered from the main view
#[derive(Debug, Clone, PartialEq)]
pub enum MainAction {
    None,
    AddStock,
    Edit,
}
