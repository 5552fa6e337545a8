//! WASM exports for the desktop engine
//!
//! Containers are addressed from JS as `"desktop"` or by the open folder's
//! item id. Results and views cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::config::DesktopConfig;
use crate::container::ContainerId;
use crate::engine::DesktopEngine;
use crate::item::ItemId;

const UNHANDLED_JSON: &str = r#"{"type":"unhandled"}"#;

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a new desktop controller with the seed items
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            engine: DesktopEngine::new(),
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize the desktop with screen dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height);
    }

    /// Resize the desktop viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    /// Replace the config; items keep their positions
    ///
    /// Returns an error message if the JSON is malformed or out of range.
    #[wasm_bindgen]
    pub fn load_config_json(&mut self, json: &str) -> Result<(), JsValue> {
        let config = DesktopConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.engine
            .set_config(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle pointer down on an icon
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, container: &str, item_id: &str, x: f32, y: f32, click_count: u32) -> String {
        let result = self
            .engine
            .handle_pointer_down(&container_id(container), &ItemId::from(item_id), x, y, click_count);
        serde_json::to_string(&result).unwrap_or_else(|_| UNHANDLED_JSON.to_string())
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_move(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| UNHANDLED_JSON.to_string())
    }

    /// Handle pointer up event
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        let result = self.engine.handle_pointer_up();
        serde_json::to_string(&result).unwrap_or_else(|_| UNHANDLED_JSON.to_string())
    }

    /// Handle wheel event
    #[wasm_bindgen]
    pub fn wheel(&mut self, dy: f32, ctrl: bool) -> String {
        let result = self.engine.handle_wheel(dy, ctrl);
        serde_json::to_string(&result).unwrap_or_else(|_| UNHANDLED_JSON.to_string())
    }

    /// Handle key down event
    #[wasm_bindgen]
    pub fn key_down(&mut self, code: &str) -> String {
        let result = self.engine.handle_key_down(code);
        serde_json::to_string(&result).unwrap_or_else(|_| UNHANDLED_JSON.to_string())
    }

    // =========================================================================
    // Folders
    // =========================================================================

    /// Open a folder shown in `container`
    #[wasm_bindgen]
    pub fn open_folder(&mut self, container: &str, folder_id: &str) -> bool {
        self.engine
            .open_folder(&container_id(container), &ItemId::from(folder_id))
            .unwrap_or(false)
    }

    /// Close a folder window
    #[wasm_bindgen]
    pub fn close_folder(&mut self, folder_id: &str) -> bool {
        self.engine.close_folder(&ItemId::from(folder_id))
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Get the frame to paint as JSON
    #[wasm_bindgen]
    pub fn get_view_json(&self) -> String {
        serde_json::to_string(&self.engine.view()).unwrap_or_else(|_| "{}".to_string())
    }
}

fn container_id(container: &str) -> ContainerId {
    match container {
        "" | "desktop" => ContainerId::Desktop,
        id => ContainerId::Folder(ItemId::from(id)),
    }
}
