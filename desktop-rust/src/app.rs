use eframe::egui::{self, Color32, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};

use crate::io::load_catalog_file;
use recetas_common::{filter_by_title, scale, Catalog, NavState, Recipe, ScaledIngredient};

/// 人数コントロールの上限（CLIのConfig::max_servingsと同じ既定値）
const MAX_SERVINGS: u32 = 99;

pub struct DesktopApp {
    catalog: Catalog,
    nav: NavState,
    query: String,
    /// 現在の人数に対する換算結果。人数変更のたびに再計算する
    scaled: Vec<ScaledIngredient>,
    scale_error: Option<String>,
    status: String,
}

impl Default for DesktopApp {
    fn default() -> Self {
        let catalog = Catalog::builtin();
        Self {
            status: format!("{} recetas", catalog.len()),
            catalog,
            nav: NavState::default(),
            query: String::new(),
            scaled: Vec::new(),
            scale_error: None,
        }
    }
}

impl DesktopApp {
    fn open_catalog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            match load_catalog_file(&path) {
                Ok(catalog) => {
                    self.status = format!("Loaded {} ({} recetas)", path.display(), catalog.len());
                    self.catalog = catalog;
                    self.nav.back();
                    self.query.clear();
                }
                Err(err) => self.status = format!("Load failed: {err:#}"),
            }
        }
    }

    fn select(&mut self, recipe: &Recipe) {
        self.nav.select_recipe(recipe);
        self.rescale();
    }

    fn rescale(&mut self) {
        self.scaled.clear();
        self.scale_error = None;
        let Some((recipe, servings)) = self.nav.detail() else {
            return;
        };
        match scale(recipe, servings) {
            Ok(scaled) => self.scaled = scaled,
            // 分量は推測表示しない。エラーをそのまま出す
            Err(err) => self.scale_error = Some(err.to_string()),
        }
    }

    fn render_catalog(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("🔍");
            // 1キー入力ごとに下のフィルタが再評価される
            ui.add(egui::TextEdit::singleline(&mut self.query).hint_text("Buscar recetas..."));
        });
        ui.separator();

        let matches: Vec<Recipe> = filter_by_title(self.catalog.all(), &self.query)
            .into_iter()
            .cloned()
            .collect();
        ui.label(format!("{} recetas", matches.len()));
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for recipe in &matches {
                    self.render_card(ui, recipe);
                    ui.add_space(8.0);
                }
            });
    }

    fn render_card(&mut self, ui: &mut egui::Ui, recipe: &Recipe) {
        let frame = egui::Frame::none()
            .fill(Color32::from_rgb(24, 28, 40))
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(40)))
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(10.0));

        let inner = frame.show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&recipe.title).strong().size(16.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(&recipe.prep_time)
                                .color(Color32::from_gray(160))
                                .size(12.0),
                        );
                    });
                });
                ui.label(
                    RichText::new(&recipe.description)
                        .color(Color32::from_gray(180))
                        .size(12.0),
                );
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("🔥 {}", recipe.method)).size(11.0));
                    ui.label(RichText::new(format!("⏱ {}", recipe.cook_time)).size(11.0));
                    ui.label(
                        RichText::new(format!("👥 {} raciones", recipe.base_servings)).size(11.0),
                    );
                });
            });
        });

        if inner.response.interact(egui::Sense::click()).clicked() {
            self.select(recipe);
        }
    }

    fn render_detail(&mut self, ui: &mut egui::Ui) {
        let Some((recipe, servings)) = self.nav.detail() else {
            return;
        };
        let recipe = recipe.clone();

        ui.horizontal(|ui| {
            if ui.button("← Volver").clicked() {
                self.nav.back();
                self.scaled.clear();
                self.scale_error = None;
                return;
            }
            ui.heading(&recipe.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(&recipe.calories)
                        .color(Color32::from_rgb(246, 150, 69))
                        .strong(),
                );
            });
        });
        if self.nav.is_catalog() {
            return;
        }

        ui.label(RichText::new(&recipe.description).color(Color32::from_gray(180)));
        ui.horizontal(|ui| {
            ui.label(format!("Tiempo: {}", recipe.cook_time));
            ui.separator();
            ui.label(format!("Método: {}", recipe.method));
            ui.separator();
            ui.label(format!("Categoría: {}", recipe.category));
        });
        ui.separator();

        // 人数コントロール
        ui.horizontal(|ui| {
            ui.label(RichText::new("👥 Raciones").strong());
            if ui.button("−").clicked() {
                self.nav.decrement_servings();
                self.rescale();
            }
            // クリック直後の値を表示するため、その都度状態から読む
            let current = self.nav.detail().map(|(_, s)| s).unwrap_or(servings);
            ui.label(RichText::new(format!("{current}")).strong().size(16.0));
            let can_add = current < MAX_SERVINGS;
            if ui.add_enabled(can_add, egui::Button::new("+")).clicked() {
                self.nav.increment_servings();
                self.rescale();
            }
            ui.label(
                RichText::new("los ingredientes se recalculan automáticamente")
                    .color(Color32::from_gray(140))
                    .size(11.0),
            );
        });
        ui.add_space(8.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.label(RichText::new("Ingredientes").strong().size(14.0));
            if let Some(err) = &self.scale_error {
                ui.colored_label(Color32::from_rgb(220, 80, 80), err);
            } else {
                egui::Grid::new("ingredients")
                    .striped(true)
                    .min_col_width(120.0)
                    .show(ui, |ui| {
                        for ing in &self.scaled {
                            ui.label(&ing.name);
                            let quantity = if ing.quantity_text.is_empty() {
                                ing.unit.clone()
                            } else {
                                format!("{} {}", ing.quantity_text, ing.unit)
                            };
                            ui.label(RichText::new(quantity).strong());
                            ui.end_row();
                        }
                    });
            }

            ui.add_space(12.0);
            ui.label(RichText::new("Preparación").strong().size(14.0));
            for (i, step) in recipe.steps.iter().enumerate() {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(format!("{}.", i + 1)).strong());
                    ui.label(step);
                });
            }
        });
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Catalog JSON").clicked() {
                        self.open_catalog();
                        ui.close_menu();
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(&self.status).size(11.0));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.nav.is_catalog() {
                self.render_catalog(ui);
            } else {
                self.render_detail(ui);
            }
        });
    }
}

/// アクセント付きタイトル（Salmón等）の表示が欠けないよう、
/// システムフォントを1つ先頭に差し込む。見つからなければ既定のまま
pub fn configure_fonts(ctx: &egui::Context) {
    let candidates = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    ];

    let Some(data) = candidates.iter().find_map(|p| std::fs::read(p).ok()) else {
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert("system_latin".to_string(), FontData::from_owned(data));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, "system_latin".to_string());
    }
    ctx.set_fonts(fonts);
}
