use isoptera_core::config::AppConfig;
use isoptera_core::{Engine, TransitionTable};
use isoptera_data::{Symbol, TurnEncoding};

#[allow(dead_code)]
pub struct EngineBuilder {
    width: usize,
    height: usize,
    encoding: TurnEncoding,
    literal: Vec<[[u32; 3]; 2]>,
    start: usize,
    final_states: Vec<usize>,
    blank: Symbol,
}

#[allow(dead_code)]
impl EngineBuilder {
    /// 3x3 Langton's ant.
    pub fn new() -> Self {
        Self {
            width: 3,
            height: 3,
            encoding: TurnEncoding::BitFlag,
            literal: vec![[[1, 2, 0], [0, 8, 0]]],
            start: 0,
            final_states: Vec::new(),
            blank: Symbol::Zero,
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_literal(mut self, encoding: TurnEncoding, literal: &[[[u32; 3]; 2]]) -> Self {
        self.encoding = encoding;
        self.literal = literal.to_vec();
        self
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_final_states(mut self, states: &[usize]) -> Self {
        self.final_states = states.to_vec();
        self
    }

    pub fn with_blank(mut self, blank: Symbol) -> Self {
        self.blank = blank;
        self
    }

    pub fn build(self) -> Engine {
        let table = TransitionTable::from_literal(self.encoding, &self.literal)
            .expect("Failed to build table");
        Engine::with_blank(self.width, self.height, table, self.start, self.blank)
            .expect("Failed to build engine")
            .with_final_states(self.final_states)
            .expect("Failed to set final states")
    }
}

/// Small grid and frame so runs and exports stay fast.
#[allow(dead_code)]
pub fn small_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.grid.width = 32;
    config.grid.height = 32;
    config.display.frame_size = 64;
    config
}
