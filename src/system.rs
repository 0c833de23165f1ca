use std::path::PathBuf;

use parking_lot::Mutex;

use crate::{
    config::{JustificationConfig, Scale},
    content::TextContent,
    font_storage::FontStorage,
    layout::{ContentBox, LineLayout},
    measure::FontMeasurer,
    render::render_plan,
    renderer::{DrawSurface, TextStyle},
};

/// High-level entry point for a hosting widget.
///
/// Coordinates [`FontStorage`], the resolved [`JustificationConfig`], and
/// the per-frame paint pass. Fields sit behind `Mutex`es to allow shared
/// mutable access, which is common in UI frameworks; painting itself is
/// synchronous and runs entirely on the caller's thread.
///
/// `font_storage` is public to allow direct access when necessary (e.g. to
/// enumerate faces without going through the facade).
pub struct TextSystem {
    /// The underlying font storage.
    pub font_storage: Mutex<FontStorage>,
    /// The face selected for painting, resolved lazily on first paint.
    font_id: Mutex<Option<fontdb::ID>>,
    /// Widget configuration, replaced wholesale on configuration changes.
    config: Mutex<JustificationConfig>,
    /// Display scale used to convert the configured text size to pixels.
    scale: Scale,
}

impl TextSystem {
    /// Creates a system with default configuration and empty font storage.
    pub fn new(scale: Scale) -> Self {
        Self {
            font_storage: Mutex::new(FontStorage::new()),
            font_id: Mutex::new(None),
            config: Mutex::new(JustificationConfig::default()),
            scale,
        }
    }
}

/// font storage initialization
impl TextSystem {
    /// Loads the system fonts into the storage.
    pub fn load_system_fonts(&self) {
        self.font_storage.lock().load_system_fonts();
    }

    /// Loads a font from binary data.
    pub fn load_font_binary(&self, data: impl Into<Vec<u8>>) {
        self.font_storage.lock().load_font_binary(data);
    }

    /// Loads a font from a file path.
    pub fn load_font_file(&self, path: PathBuf) -> Result<(), std::io::Error> {
        self.font_storage.lock().load_font_file(path)
    }

    /// Selects the face used for painting. Until this is called the first
    /// paint resolves a sans-serif default.
    pub fn select_font(&self, query: &fontdb::Query<'_>) -> Option<fontdb::ID> {
        let id = self.font_storage.lock().query(query).map(|(id, _)| id);
        if let Some(id) = id {
            *self.font_id.lock() = Some(id);
        }
        id
    }
}

/// configuration
impl TextSystem {
    /// Replaces the widget configuration.
    ///
    /// Configuration is written between frames, never during a paint pass,
    /// so painting observes one consistent snapshot.
    pub fn set_config(&self, config: JustificationConfig) {
        *self.config.lock() = config;
    }

    /// Returns a snapshot of the current configuration.
    pub fn config(&self) -> JustificationConfig {
        self.config.lock().clone()
    }

    /// The display scale this system converts text sizes with.
    pub fn scale(&self) -> Scale {
        self.scale
    }
}

/// painting
impl TextSystem {
    /// Paints one frame onto `surface`.
    ///
    /// Builds the justification plan for `content` against the lines the
    /// external engine produced and issues one `draw_text` call per plan
    /// op. If no usable font is registered the frame is skipped with a
    /// warning; immediate-mode rendering has nothing to retry.
    pub fn paint(
        &self,
        content: &TextContent,
        layout: &impl LineLayout,
        content_box: &ContentBox,
        surface: &mut impl DrawSurface,
    ) {
        let config = self.config();

        // Copy the cached id out before matching; matching on the guard
        // itself would keep `font_id` locked across the `None` arm, which
        // re-locks it to store the resolved face.
        let cached = *self.font_id.lock();
        let resolved = {
            let mut storage = self.font_storage.lock();
            match cached {
                Some(id) => storage.font(id).map(|font| (id, font)),
                None => {
                    let found = storage.default_font();
                    if let Some((id, _)) = &found {
                        *self.font_id.lock() = Some(*id);
                    }
                    found
                }
            }
        };

        let Some((font_id, font)) = resolved else {
            log::warn!("Paint called before any usable font was loaded.");
            return;
        };

        let px_size = self.scale.to_px(config.text_size);
        let measurer = FontMeasurer::new(font, px_size);
        let style = TextStyle {
            font_id,
            px_size,
            color: config.text_color,
        };

        for op in render_plan(content, layout, &config, content_box, &measurer) {
            surface.draw_text(op.text, op.pos, &style);
        }
    }
}
