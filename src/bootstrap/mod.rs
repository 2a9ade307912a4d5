//=========================================================================
// Bootstrap
//
// Builds everything the loop needs and hands over control.
//
// Architecture:
// ```text
//     BootstrapBuilder  ──build()──>  Bootstrap  ──run()──>  [Frame loop]
//         │                              │
//         ├─ register()                  ├─ config     (<name>.toml)
//         ├─ with_config_path()          ├─ logging    (<name>.log)
//         └─ with_log_path()             ├─ window + input
//                                        ├─ framebuffer surface
//                                        ├─ clock
//                                        └─ LoopController::run()
// ```
//
//=========================================================================

//=== Module Declarations =================================================

pub mod config;
pub mod logging;

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};

use log::{info, Level};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::clock::Clock;
use crate::core::controller::LoopController;
use crate::core::error::LoopError;
use crate::core::state::{State, StateKey, StateRegistry};
use crate::platform::{PixelsSurface, Platform};
use config::{Config, ConfigError};
use logging::{init_logging, LoggingError};

pub use crate::platform::PlatformError;

//=== BootstrapError ======================================================

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("failed to create framebuffer: {0}")]
    Display(#[from] pixels::Error),

    #[error(transparent)]
    Loop(#[from] LoopError),
}

//=== BootstrapBuilder ====================================================

/// Builder for a [`Bootstrap`].
///
/// `name` sets the default file names: `<name>.toml` for the config and
/// `<name>.log` for the log.
///
/// # Examples
///
/// ```no_run
/// use stateloop::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Screen { Idle }
/// impl StateKey for Screen {}
///
/// BootstrapBuilder::new("game", Screen::Idle)
///     .register(Screen::Idle, IdleState::<Screen>::new)
///     .build()
///     .run()
///     .unwrap();
/// ```
pub struct BootstrapBuilder<K: StateKey> {
    name: String,
    starting: K,
    registry: StateRegistry<K>,
    config_path: Option<PathBuf>,
    log_path: Option<PathBuf>,
}

impl<K: StateKey> BootstrapBuilder<K> {
    pub fn new(name: impl Into<String>, starting: K) -> Self {
        Self {
            name: name.into(),
            starting,
            registry: StateRegistry::new(),
            config_path: None,
            log_path: None,
        }
    }

    /// Registers a state factory. See [`StateRegistry::register`].
    pub fn register<F, T>(mut self, key: K, factory: F) -> Self
    where
        F: Fn() -> T + 'static,
        T: State<K> + 'static,
    {
        self.registry.register(key, factory);
        self
    }

    /// Overrides the config file location. Default: `<name>.toml`.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Overrides the log file location. Default: `<name>.log`.
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn build(self) -> Bootstrap<K> {
        let config_path = self
            .config_path
            .unwrap_or_else(|| PathBuf::from(format!("{}.toml", self.name)));
        let log_path = self
            .log_path
            .unwrap_or_else(|| PathBuf::from(format!("{}.log", self.name)));

        Bootstrap {
            starting: self.starting,
            registry: self.registry,
            config_path,
            log_path,
        }
    }
}

//=== Bootstrap ===========================================================

/// Entry point of a game: owns the registry and the file locations until
/// [`Bootstrap::run`] wires everything together.
pub struct Bootstrap<K: StateKey> {
    starting: K,
    registry: StateRegistry<K>,
    config_path: PathBuf,
    log_path: PathBuf,
}

impl<K: StateKey> Bootstrap<K> {
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Runs the game until a quit event arrives.
    ///
    /// # Lifecycle
    ///
    /// 1. Checks the starting state is registered
    /// 2. Loads (or creates) the config file
    /// 3. Installs the file logger
    /// 4. Opens the window and its framebuffer
    /// 5. Runs the frame loop
    ///
    /// Returns `Ok(())` on quit. The caller should exit the process
    /// immediately afterwards.
    ///
    /// # Errors
    ///
    /// Any setup failure, or a fatal [`LoopError`] from the loop.
    pub fn run(mut self) -> Result<(), BootstrapError> {
        //--- 1. Registry sanity -------------------------------------------
        if !self.registry.contains(&self.starting) {
            return Err(LoopError::UnknownState(format!("{:?}", self.starting)).into());
        }

        //--- 2. Config and logging ----------------------------------------
        let config = Config::load_or_create(&self.config_path)?;
        init_logging(&self.log_path, config.logging.logging_level)?;
        info!(
            "Configuration loaded from {} (level {:?}, trace_calls {})",
            self.config_path.display(),
            config.logging.logging_level,
            config.logging.trace_calls
        );

        if config.logging.trace_calls {
            self.registry.set_tracing(Some(Level::Debug));
        }

        //--- 3. Window, surface, clock ------------------------------------
        let mut platform = Platform::open(&config.display)?;
        let window = platform.window().ok_or(PlatformError::WindowUnavailable)?;
        let mut surface = PixelsSurface::new(window, config.display.width, config.display.height)?;
        let mut clock = Clock::new(config.timing.fps);

        //--- 4. Frame loop ------------------------------------------------
        info!("Starting frame loop at {} FPS", config.timing.fps);
        let mut controller = LoopController::new(
            &mut surface,
            &mut clock,
            &self.registry,
            &mut platform,
            self.starting.clone(),
        )?;
        if config.logging.trace_calls {
            controller.set_tracing(Some(Level::Debug));
        }
        controller.run()?;

        info!("Quit requested, shutting down");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
