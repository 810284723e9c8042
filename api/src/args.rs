use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Parser};
use nutrilens_core::domain::{
    classification::value_objects::{ImageDimensions, InputLayout},
    common::{AssistantConfig, ClassifierConfig, NutriLensConfig, NutritionConfig},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrilens-api", version, about = "Food photo classification and nutrition API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    #[command(flatten)]
    pub usda: UsdaArgs,

    #[command(flatten)]
    pub gemini: GeminiArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix of every API route, without a trailing slash.
    #[arg(long, env = "ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,

    /// Comma separated list of origins. `*` allows any origin without credentials.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "*")]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ClassifierArgs {
    #[arg(
        long,
        env = "MODEL_PATH",
        default_value = "models/fruit_vegetable_classifier.onnx"
    )]
    pub model_path: PathBuf,

    #[arg(long, env = "IMG_WIDTH", default_value_t = 150)]
    pub img_width: u32,

    #[arg(long, env = "IMG_HEIGHT", default_value_t = 150)]
    pub img_height: u32,

    /// `nhwc` for Keras exports, `nchw` for channel-first exports.
    #[arg(long, env = "MODEL_INPUT_LAYOUT", default_value = "nhwc")]
    pub input_layout: InputLayout,
}

#[derive(Debug, Clone, clap::Args)]
pub struct UsdaArgs {
    #[arg(long, env = "USDA_API_KEY", hide_env_values = true)]
    pub usda_api_key: Option<String>,

    #[arg(
        long,
        env = "USDA_BASE_URL",
        default_value = "https://api.nal.usda.gov/fdc/v1"
    )]
    pub usda_base_url: String,

    #[arg(long, env = "USDA_TIMEOUT_SECS", default_value_t = 5)]
    pub usda_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct GeminiArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub gemini_base_url: String,

    #[arg(long, env = "GEMINI_TIMEOUT_SECS", default_value_t = 15)]
    pub gemini_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Any `tracing_subscriber::EnvFilter` directive, e.g. `info,nutrilens_core=debug`.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub log_json: bool,
}

impl From<&Args> for NutriLensConfig {
    fn from(args: &Args) -> Self {
        NutriLensConfig {
            classifier: ClassifierConfig {
                model_path: args.classifier.model_path.clone(),
                input_dimensions: ImageDimensions {
                    width: args.classifier.img_width,
                    height: args.classifier.img_height,
                },
                input_layout: args.classifier.input_layout,
            },
            nutrition: NutritionConfig {
                usda_api_key: args.usda.usda_api_key.clone(),
                usda_base_url: args.usda.usda_base_url.clone(),
                request_timeout: Duration::from_secs(args.usda.usda_timeout_secs),
            },
            assistant: AssistantConfig {
                gemini_api_key: args.gemini.gemini_api_key.clone(),
                gemini_model: args.gemini.gemini_model.clone(),
                gemini_base_url: args.gemini.gemini_base_url.clone(),
                request_timeout: Duration::from_secs(args.gemini.gemini_timeout_secs),
            },
        }
    }
}
