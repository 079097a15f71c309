//! Demo application state and frame loop.

use std::path::Path;
use std::sync::Arc;

use egui::{Color32, CornerRadius, RichText};
use serde::{Deserialize, Serialize};
use slidekit_core::{Carousel, CarouselConfig, ConfigError, MemoryPreferences, PreferenceStore};
use slidekit_widgets::CarouselView;
use thiserror::Error;

use crate::settings::SettingsPanel;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read config {0}: {1}")]
    ConfigIo(String, std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Window error: {0}")]
    Window(String),
}

/// Carousel configuration for the demo page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Hero banner (one slide per view).
    pub hero: CarouselConfig,
    /// Category strip (several items per view).
    pub categories: CarouselConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hero: CarouselConfig::slider()
                .with_auto_rotate(true)
                .with_rotation_interval_ms(4000),
            categories: CarouselConfig::category(4),
        }
    }
}

impl AppConfig {
    /// Load a config file; missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::ConfigIo(path.display().to_string(), e))?;
        Self::from_json(&json)
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json)
            .map_err(|e| AppError::Config(ConfigError::Parse(e)))
    }
}

/// A hero banner.
#[derive(Debug, Clone)]
struct HeroSlide {
    title: &'static str,
    subtitle: &'static str,
    color: Color32,
}

/// A product category tile.
#[derive(Debug, Clone)]
struct Category {
    name: &'static str,
    items: u32,
}

fn hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide { title: "Autumn collection", subtitle: "New arrivals every week", color: Color32::from_rgb(234, 88, 12) },
        HeroSlide { title: "Free shipping", subtitle: "On orders over 50", color: Color32::from_rgb(22, 163, 74) },
        HeroSlide { title: "Members save 10%", subtitle: "Sign in to unlock prices", color: Color32::from_rgb(37, 99, 235) },
        HeroSlide { title: "Outlet", subtitle: "Last sizes, lowest prices", color: Color32::from_rgb(147, 51, 234) },
        HeroSlide { title: "Gift cards", subtitle: "Delivered instantly", color: Color32::from_rgb(219, 39, 119) },
    ]
}

fn categories() -> Vec<Category> {
    [
        ("Shoes", 214), ("Jackets", 98), ("Shirts", 301), ("Trousers", 176),
        ("Bags", 64), ("Hats", 41), ("Socks", 88), ("Watches", 37),
        ("Scarves", 29), ("Belts", 52), ("Gloves", 33), ("Sunglasses", 47),
    ]
    .into_iter()
    .map(|(name, items)| Category { name, items })
    .collect()
}

/// Open the preference store, falling back to memory when the disk is unavailable.
fn open_preferences() -> Arc<dyn PreferenceStore> {
    match slidekit_core::FilePreferences::default_location() {
        Ok(store) => {
            log::info!("Preferences at {}", store.path().display());
            Arc::new(store)
        }
        Err(e) => {
            log::warn!("Using in-memory preferences: {}", e);
            Arc::new(MemoryPreferences::new())
        }
    }
}

/// Demo application.
pub struct App {
    hero: Carousel<HeroSlide>,
    categories: Carousel<Category>,
    settings: SettingsPanel,
}

impl App {
    /// Build the demo page.
    pub fn new(config: AppConfig) -> Self {
        let preferences = open_preferences();

        let mut hero = Carousel::new(hero_slides(), config.hero).with_preferences(preferences.clone());
        hero.on_slide_change(|index| log::info!("hero: slide {} shown", index));

        let mut categories =
            Carousel::new(categories(), config.categories).with_preferences(preferences.clone());
        categories.on_slide_change(|index| log::info!("categories: scrolled to {}", index));

        let settings = SettingsPanel::new(preferences, hero.config().auto_rotate);

        Self {
            hero,
            categories,
            settings,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("settings").min_width(220.0).show(ctx, |ui| {
            if let Some(enabled) = self.settings.show(ui) {
                self.hero.set_auto_rotate(enabled);
            }
            ui.add_space(8.0);
            ui.label(format!(
                "Swipe threshold: {:.0}px hero, {:.0}px categories",
                self.hero.min_swipe_distance(),
                self.categories.min_swipe_distance()
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Featured");
            CarouselView::new("hero")
                .height(220.0)
                .show_with_controls(ui, &mut self.hero, |ui, slide, _| {
                    let rect = ui.max_rect();
                    ui.painter().rect_filled(rect, CornerRadius::same(8), slide.color);
                    ui.add_space((rect.height() / 2.0 - 24.0).max(0.0));
                    ui.label(RichText::new(slide.title).size(26.0).color(Color32::WHITE));
                    ui.label(RichText::new(slide.subtitle).size(14.0).color(Color32::WHITE));
                });

            ui.add_space(24.0);
            ui.heading("Shop by category");
            CarouselView::new("categories")
                .height(120.0)
                .show_with_controls(ui, &mut self.categories, |ui, category, _| {
                    let rect = ui.max_rect().shrink(6.0);
                    ui.painter().rect_filled(rect, CornerRadius::same(6), Color32::from_gray(240));
                    ui.add_space((rect.height() / 2.0 - 12.0).max(0.0));
                    ui.label(RichText::new(category.name).strong());
                    ui.label(RichText::new(format!("{} items", category.items)).small());
                });
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.hero.destroy();
        self.categories.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.hero.auto_rotate);
        assert_eq!(config.categories.visible_count(), 4);
    }

    #[test]
    fn test_config_partial_json() {
        let config = AppConfig::from_json(r#"{ "hero": { "auto_rotate": false } }"#).unwrap();
        assert!(!config.hero.auto_rotate);
        assert_eq!(config.categories, CarouselConfig::category(4));
    }

    #[test]
    fn test_config_invalid_json() {
        assert!(matches!(AppConfig::from_json("[1, 2"), Err(AppError::Config(_))));
    }

    #[test]
    fn test_demo_content() {
        assert_eq!(hero_slides().len(), 5);
        assert_eq!(categories().len(), 12);
    }
}
