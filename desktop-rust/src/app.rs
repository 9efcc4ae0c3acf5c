use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::mpsc::{self, Receiver};

use eframe::egui::{self, Color32, RichText};
use material_lookup_common::documents::open_route_message;
use material_lookup_common::{
    check_storage_access, AppConfig, DesktopStorage, Lookup, PhotoViewer, SystemOpener, ZoomRange,
};

use crate::io::{is_live_key, load_rgba, texture_key, FULL_SIZE, THUMB_SIZE};
use crate::model::AppState;

const GALLERY_THUMB: egui::Vec2 = egui::vec2(160.0, 120.0);

pub struct DesktopApp {
    config: AppConfig,
    lookup: Lookup,
    state: AppState,
    viewer: PhotoViewer,
    textures: HashMap<String, egui::TextureHandle>,
    image_rx: Receiver<ImageData>,
    image_tx: mpsc::Sender<ImageData>,
    inflight: HashSet<String>,
    failed: HashSet<String>,
    pending: Vec<ImageData>,
}

struct ImageData {
    key: String,
    size: [usize; 2],
    pixels: Vec<u8>,
}

impl DesktopApp {
    pub fn new(config: AppConfig) -> Self {
        let (image_tx, image_rx) = mpsc::channel();
        let mut app = Self {
            lookup: Lookup::from_config(&config),
            viewer: PhotoViewer::new(ZoomRange::from_config(&config)),
            config,
            state: AppState::default(),
            textures: HashMap::new(),
            image_rx,
            image_tx,
            inflight: HashSet::new(),
            failed: HashSet::new(),
            pending: Vec::new(),
        };
        app.check_storage();
        app
    }

    fn check_storage(&mut self) {
        if !check_storage_access(&DesktopStorage::new(&self.config.assets_root)) {
            self.state.status = format!(
                "Sem acesso à pasta de assets: {}",
                self.config.assets_root.display()
            );
        }
    }

    fn choose_assets_root(&mut self) {
        let Some(folder) = rfd::FileDialog::new().pick_folder() else {
            return;
        };
        self.config.assets_root = folder;
        if let Err(err) = self.config.save() {
            tracing::warn!("config save failed: {}", err);
        }
        self.lookup = Lookup::from_config(&self.config);
        self.state = AppState::default();
        self.viewer.back();
        self.textures.clear();
        self.failed.clear();
        self.check_storage();
    }

    fn search(&mut self) {
        let code = self.state.code_input.clone();
        let (description, additional) = self.lookup.catalog.search(&code);
        let photos = self.lookup.photos.find(&code);
        self.state.apply_search(code, description, additional, photos);
        self.evict_stale_textures();
    }

    /// 一覧にもビューアにも無い写真のテクスチャを捨てる
    fn evict_stale_textures(&mut self) {
        let photos = &self.state.photos;
        let open = self.viewer.photo();
        self.textures.retain(|key, _| is_live_key(key, photos, open));
        self.failed.retain(|key| is_live_key(key, photos, open));
    }

    fn close_viewer(&mut self) {
        self.viewer.back();
        self.evict_stale_textures();
    }

    fn open_additional(&mut self) {
        if self.state.needs_search() {
            self.search();
        }
        let route = self.lookup.documents.route(&self.state.additional);
        self.state.status = open_route_message(&route, &SystemOpener);
    }

    fn request_image(&mut self, path: &Path, full: bool) {
        let key = texture_key(path, full);
        if self.textures.contains_key(&key) || self.inflight.contains(&key) || self.failed.contains(&key) {
            return;
        }
        self.inflight.insert(key.clone());
        let sender = self.image_tx.clone();
        let path_owned = path.to_path_buf();
        let max = if full { FULL_SIZE } else { THUMB_SIZE };

        std::thread::spawn(move || {
            let data = match load_rgba(&path_owned, max) {
                Ok(rgba) => ImageData {
                    key,
                    size: [rgba.width() as usize, rgba.height() as usize],
                    pixels: rgba.into_raw(),
                },
                Err(err) => {
                    tracing::warn!("image load failed: {:#}", err);
                    ImageData {
                        key,
                        size: [0, 0],
                        pixels: Vec::new(),
                    }
                }
            };
            let _ = sender.send(data);
        });
    }

    fn poll_images(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.image_rx.try_recv() {
            self.inflight.remove(&msg.key);
            self.pending.push(msg);
        }

        let pending = std::mem::take(&mut self.pending);
        for msg in pending {
            if !is_live_key(&msg.key, &self.state.photos, self.viewer.photo()) {
                continue;
            }
            if msg.size[0] == 0 || msg.size[1] == 0 {
                self.failed.insert(msg.key);
                continue;
            }
            let color_image = egui::ColorImage::from_rgba_unmultiplied(msg.size, &msg.pixels);
            let texture = ctx.load_texture(&msg.key, color_image, egui::TextureOptions::default());
            self.textures.insert(msg.key, texture);
        }
    }

    fn render_lookup(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Código");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.state.code_input)
                    .hint_text("12.345.678")
                    .desired_width(200.0),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Buscar").clicked() || submitted {
                self.search();
            }
            if ui.button("Dados Adicionais").clicked() {
                self.open_additional();
            }
        });

        ui.add_space(8.0);
        let result = self.state.result_text();
        if !result.is_empty() {
            ui.group(|ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new(result).size(14.0));
            });
        }

        if !self.state.status.is_empty() {
            ui.label(RichText::new(&self.state.status).color(Color32::from_rgb(246, 196, 69)));
        }

        ui.add_space(8.0);
        ui.separator();
        self.render_gallery(ui);
    }

    fn render_gallery(&mut self, ui: &mut egui::Ui) {
        if self.state.searched() && self.state.photos.is_empty() {
            ui.label("Nenhuma foto disponível");
            return;
        }

        let photos = self.state.photos.clone();
        egui::ScrollArea::horizontal()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for photo in &photos {
                        let key = texture_key(photo, false);
                        if let Some(texture) = self.textures.get(&key).cloned() {
                            let response = ui.add(
                                egui::Image::new(&texture)
                                    .fit_to_exact_size(GALLERY_THUMB)
                                    .sense(egui::Sense::click()),
                            );
                            if response.on_hover_text(photo.display().to_string()).clicked() {
                                self.viewer.open(photo.clone());
                            }
                        } else {
                            self.request_image(photo, false);
                            let text = if self.failed.contains(&key) { "Sem imagem" } else { "Carregando..." };
                            ui.allocate_ui_with_layout(
                                GALLERY_THUMB,
                                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                                |ui| {
                                    ui.label(text);
                                },
                            );
                        }
                    }
                });
            });
    }

    fn render_viewer(&mut self, ui: &mut egui::Ui) {
        let Some(photo) = self.viewer.photo().map(Path::to_path_buf) else {
            return;
        };

        ui.horizontal(|ui| {
            if ui.add_enabled(self.viewer.can_zoom_out(), egui::Button::new("−")).clicked() {
                self.viewer.zoom_out();
            }
            if ui.add_enabled(self.viewer.can_zoom_in(), egui::Button::new("+")).clicked() {
                self.viewer.zoom_in();
            }
            ui.label(format!("{:.0}%", self.viewer.zoom() * 100.0));
            if ui.button("Voltar").clicked() {
                self.close_viewer();
            }
            ui.separator();
            ui.label(RichText::new(file_label(&photo)).color(Color32::from_gray(170)));
        });
        ui.separator();
        if !self.viewer.is_open() {
            return;
        }

        let key = texture_key(&photo, true);
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.textures.get(&key).cloned() {
                Some(texture) => {
                    let size = texture.size_vec2() * self.viewer.zoom();
                    ui.add(egui::Image::new(&texture).fit_to_exact_size(size));
                }
                None if self.failed.contains(&key) => {
                    ui.label("Não foi possível carregar a foto.");
                }
                None => {
                    self.request_image(&photo, true);
                    ui.label("Carregando...");
                }
            });
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.inflight.is_empty() || !self.pending.is_empty() {
            ctx.request_repaint();
        }
        self.poll_images(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Arquivo", |ui| {
                    if ui.button("Pasta de assets...").clicked() {
                        self.choose_assets_root();
                        ui.close_menu();
                    }
                });
                ui.separator();
                ui.label(
                    RichText::new(self.config.assets_root.display().to_string())
                        .color(Color32::from_gray(170)),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.viewer.is_open() {
                self.render_viewer(ui);
            } else {
                ui.heading("Consulta de Materiais");
                ui.separator();
                self.render_lookup(ui);
            }
        });
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
