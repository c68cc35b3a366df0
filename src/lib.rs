pub mod engine;
pub mod error;
pub mod world;

pub use engine::{Command, Controller, Output, OutputBlock};
pub use error::{GameError, Result};
pub use world::{
    Item, Player, Room, ValidationError, World, load_world_from_file, load_world_from_str,
    validate_world,
};

/// World used when no file is given on the command line.
pub const DEFAULT_WORLD: &str = include_str!("../worlds/hall.toml");

/// Load a world from TOML text and reject it unless it validates cleanly.
pub fn load_validated_world(contents: &str) -> Result<World> {
    check_world(load_world_from_str(contents)?)
}

/// Pass `world` through unchanged if it validates cleanly.
pub fn check_world(world: World) -> Result<World> {
    let errors = validate_world(&world);
    if errors.is_empty() {
        Ok(world)
    } else {
        Err(GameError::Validation(errors))
    }
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<OutputBlock>,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        controller: Controller,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from a TOML world string.
        #[wasm_bindgen(constructor)]
        pub fn new(world_toml: &str) -> std::result::Result<WasmGame, JsValue> {
            let world =
                load_validated_world(world_toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                controller: Controller::from_world(world),
            })
        }

        /// The welcome banner.
        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            to_value(&WasmStepResult {
                blocks: self.controller.welcome().blocks,
                quit: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process a player command and return the resulting output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let out = self.controller.handle_input(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit: !self.controller.is_running(),
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}
