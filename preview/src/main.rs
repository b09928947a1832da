//! Desktop preview app for the sunrise
//!
//! Renders the sunrise preset in a window with playback controls, so
//! palettes and luminosity curves can be tuned without hardware.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use myrtio_sunrise::{
    LuminosityProfile, Sky,
    clock::progress,
    luminosity::{DEFAULT_EXPONENT, DEFAULT_PEAK},
    preset::{DEFAULT_DURATION, DEFAULT_PIXEL_COUNT, SUNRISE_END_STOPS, SUNRISE_START_STOPS},
};
use embassy_time::Duration;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 24.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 320.0])
            .with_title("Sunrise Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-sunrise-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Sky built from the preset and the current profile
    sky: Sky<DEFAULT_PIXEL_COUNT>,
    /// Profile the sky was built with
    profile: LuminosityProfile,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let profile = LuminosityProfile::default();
        Self {
            sky: build_sky(profile),
            profile,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 20.0,
            led_size: LED_SIZE,
        }
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
    }

    /// Toggle playing state
    fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            #[allow(clippy::cast_precision_loss)]
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self
                .t_ms
                .saturating_add(delta_ms)
                .min(DEFAULT_DURATION.as_millis());
        }
    }

    /// Rebuild the sky after the profile changed
    fn apply_profile(&mut self, profile: LuminosityProfile) {
        if profile != self.profile {
            self.profile = profile;
            self.sky = build_sky(profile);
        }
    }
}

fn build_sky(profile: LuminosityProfile) -> Sky<DEFAULT_PIXEL_COUNT> {
    match Sky::with_profile(&SUNRISE_START_STOPS, &SUNRISE_END_STOPS, profile) {
        Ok(sky) => sky,
        Err(err) => panic!("sunrise preset is invalid: {err}"),
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        let current = progress(Duration::from_millis(self.t_ms), DEFAULT_DURATION);
        let frame = self.sky.colors_at(current);

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset_time();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.toggle_playing();
                        }
                    });

                    ui.add_space(4.0);

                    let secs = self.t_ms / 1000;
                    let ms = self.t_ms % 1000;
                    ui.label(format!("Time: {secs}.{ms:03}s ({:.1}%)", current * 100.0));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 1.0..=120.0).logarithmic(true));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Scrub:");
                        let mut scrub = current;
                        if ui.add(egui::Slider::new(&mut scrub, 0.0..=1.0)).changed() {
                            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
                            let t_ms = (f64::from(scrub) * DEFAULT_DURATION.as_millis() as f64) as u64;
                            self.t_ms = t_ms;
                        }
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <ProfileControls>
                ui.vertical(|ui| {
                    let mut profile = self.profile;
                    ui.horizontal(|ui| {
                        ui.label("Peak:");
                        ui.add(egui::Slider::new(&mut profile.peak, 0.5..=2.0));
                        if ui.small_button("default").clicked() {
                            profile.peak = DEFAULT_PEAK;
                        }
                    });
                    ui.horizontal(|ui| {
                        ui.label("Exponent:");
                        ui.add(egui::Slider::new(&mut profile.exponent, 0.5..=5.0));
                        if ui.small_button("default").clicked() {
                            profile.exponent = DEFAULT_EXPONENT;
                        }
                    });
                    self.apply_profile(profile);

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 8.0..=48.0));
                    });
                });
                // </ProfileControls>
            });

            ui.add_space(16.0);

            // === LED Display ===
            let led_pitch = self.led_size + LED_GAP;
            #[allow(clippy::cast_precision_loss)]
            let width = frame.len() as f32 * led_pitch;
            let (response, painter) =
                ui.allocate_painter(egui::vec2(width, led_pitch), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let x = origin.x + i as f32 * led_pitch;
                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, origin.y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
