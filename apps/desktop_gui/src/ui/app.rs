use std::time::Duration;

use client_core::{InteractionController, Phase};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{domain::AnalysisOutcome, protocol::PREDICT_PATH};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiEvent};
use crate::controller::orchestration::dispatch_analysis;
use crate::ui::theme::{self, ThemePreference};

#[derive(Debug, Clone)]
struct StatusBanner {
    category: UiErrorCategory,
    message: String,
}

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Startup => "Startup error",
        UiErrorCategory::Transport => "Connection error",
        UiErrorCategory::Unknown => "Error",
    }
}

pub fn outcome_color(outcome: &AnalysisOutcome) -> egui::Color32 {
    match outcome {
        AnalysisOutcome::Positive => theme::POSITIVE,
        AnalysisOutcome::Negative => theme::NEGATIVE,
        AnalysisOutcome::Unknown | AnalysisOutcome::Failed(_) => theme::NEUTRAL,
    }
}

pub fn submit_button_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "Analyzing…"
    } else {
        "Analyze sentiment"
    }
}

pub struct SentimentApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    controller: InteractionController,
    backend_url: String,

    status: String,
    status_banner: Option<StatusBanner>,

    theme: ThemePreference,
    applied_theme: Option<ThemePreference>,
}

impl SentimentApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        backend_url: String,
        theme: ThemePreference,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            controller: InteractionController::new(),
            backend_url,
            status: "Backend worker starting...".to_string(),
            status_banner: None,
            theme,
            applied_theme: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::AnalysisFinished(result) => {
                    let outcome = self.controller.resolve(result);
                    self.status = format!("Last result: {outcome}");
                }
                UiEvent::Error(err) => self.show_error(err),
            }
        }
    }

    fn show_error(&mut self, err: UiError) {
        tracing::warn!(context = ?err.context(), "{}", err.message());
        self.status = err.message().to_string();
        self.status_banner = Some(StatusBanner {
            category: err.category(),
            message: err.message().to_string(),
        });
    }

    fn try_submit(&mut self) {
        if let Err(err) = dispatch_analysis(&self.cmd_tx, &mut self.controller) {
            self.show_error(err);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        let egui_theme = self.theme.egui_theme();
        ctx.set_visuals_of(egui_theme, theme::visuals_for_theme(self.theme));
        ctx.set_theme(egui_theme);
        self.applied_theme = Some(self.theme);
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("X-Sentiment Pro")
                        .strong()
                        .color(egui::Color32::WHITE)
                        .background_color(theme::ACCENT),
                );
                ui.weak("Desktop UI connected to the sentiment backend");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(self.theme.toggle_icon())
                        .on_hover_text("Toggle theme")
                        .clicked()
                    {
                        self.theme = self.theme.toggled();
                    }
                });
            });
            ui.add_space(8.0);
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };
        egui::Frame::new()
            .fill(egui::Color32::from_rgb(111, 53, 53))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}: {}",
                            err_label(banner.category),
                            banner.message
                        ))
                        .color(egui::Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.status_banner = None;
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_input_card(&mut self, ui: &mut egui::Ui) {
        card_frame(ui).show(ui, |ui| {
            ui.label(egui::RichText::new("TEXT TO ANALYZE").small().strong());
            let response = ui.add(
                egui::TextEdit::multiline(self.controller.input_text_mut())
                    .id_salt("analysis_input")
                    .desired_rows(5)
                    .desired_width(f32::INFINITY)
                    .hint_text("Type or paste the text whose sentiment you want to analyze…"),
            );
            let submit_shortcut = response.has_focus()
                && ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));

            ui.add_space(6.0);
            let mut clicked = false;
            ui.horizontal(|ui| {
                ui.small("Backend endpoint:");
                ui.code(format!("POST {PREDICT_PATH}"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = submit_button_label(self.controller.is_submitting());
                    clicked = ui
                        .add_enabled(
                            self.controller.can_submit(),
                            egui::Button::new(
                                egui::RichText::new(label).color(egui::Color32::WHITE),
                            )
                            .fill(theme::ACCENT),
                        )
                        .clicked();
                    if self.controller.is_submitting() {
                        ui.spinner();
                    }
                });
            });

            if clicked || submit_shortcut {
                self.try_submit();
            }

            if let Some(message) = self.controller.last_error() {
                ui.add_space(6.0);
                ui.colored_label(theme::NEGATIVE, message);
            }
        });
    }

    fn show_result_card(&self, ui: &mut egui::Ui) {
        card_frame(ui).show(ui, |ui| {
            ui.label(egui::RichText::new("MODEL OUTPUT").small().strong());
            let outcome = self.controller.outcome();
            let label = match self.controller.phase() {
                Phase::Submitting => "Analyzing…",
                _ => outcome.display_label(),
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("●").color(outcome_color(outcome)));
                ui.label(
                    egui::RichText::new(label)
                        .strong()
                        .color(outcome_color(outcome)),
                );
            });
            ui.add_space(6.0);
            ui.weak(format!(
                "Reflects the label returned by {}{PREDICT_PATH}.",
                self.backend_url
            ));
        });
    }
}

fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::group(ui.style())
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(14))
}

impl eframe::App for SentimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);
        self.show_header(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.small(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(12.0);
                self.show_status_banner(ui);
                ui.heading("Paste any tweet, comment, or text and see the mood.");
                ui.label(
                    "Your text is sent to the backend's /predict endpoint and the predicted sentiment is shown below.",
                );
                ui.add_space(12.0);
                self.show_input_card(ui);
                ui.add_space(12.0);
                self.show_result_card(ui);
            });
        });

        if self.controller.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        theme::save_theme(storage, self.theme);
    }
}
