use std::{path::Path, sync::Arc};

use image::RgbImage;
use tokio::task;
use tract_onnx::prelude::*;

use crate::domain::{
    classification::{
        entities::ClassificationResult,
        labels::label_for_index,
        ports::Classifier,
        scoring::{arg_max, to_probabilities},
        value_objects::{ClassifierMode, ImageDimensions, InputLayout},
    },
    common::entities::app_errors::CoreError,
};

type Plan = TypedRunnableModel<TypedModel>;

/// Classifier running an ONNX export of the trained network through tract.
///
/// The optimized plan is immutable and shared, so concurrent requests run in parallel
/// on the blocking pool.
#[derive(Clone)]
pub struct OnnxClassifier {
    plan: Arc<Plan>,
    dimensions: ImageDimensions,
    layout: InputLayout,
}

impl OnnxClassifier {
    pub fn load(
        path: &Path,
        dimensions: ImageDimensions,
        layout: InputLayout,
    ) -> TractResult<Self> {
        let height = dimensions.height as usize;
        let width = dimensions.width as usize;
        let shape = match layout {
            InputLayout::Nhwc => [1, height, width, 3],
            InputLayout::Nchw => [1, 3, height, width],
        };

        let plan = tract_onnx::onnx()
            .model_for_path(path)?
            .with_input_fact(0, f32::fact(shape).into())?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self {
            plan: Arc::new(plan),
            dimensions,
            layout,
        })
    }
}

/// Pixel tensor with every channel scaled to `[0, 1]`.
pub fn image_tensor(image: &RgbImage, layout: InputLayout) -> Tensor {
    let (width, height) = image.dimensions();
    let (width, height) = (width as usize, height as usize);
    let channel = |x: usize, y: usize, c: usize| image.get_pixel(x as u32, y as u32)[c] as f32 / 255.0;

    match layout {
        InputLayout::Nhwc => {
            tract_ndarray::Array4::from_shape_fn((1, height, width, 3), |(_, y, x, c)| {
                channel(x, y, c)
            })
            .into_tensor()
        }
        InputLayout::Nchw => {
            tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
                channel(x, y, c)
            })
            .into_tensor()
        }
    }
}

impl Classifier for OnnxClassifier {
    fn mode(&self) -> ClassifierMode {
        ClassifierMode::Model
    }

    fn input_dimensions(&self) -> ImageDimensions {
        self.dimensions
    }

    async fn predict(&self, image: RgbImage) -> Result<ClassificationResult, CoreError> {
        if image.dimensions() != (self.dimensions.width, self.dimensions.height) {
            return Err(CoreError::InferenceError(format!(
                "expected a {} image, got {}x{}",
                self.dimensions,
                image.width(),
                image.height()
            )));
        }

        let plan = Arc::clone(&self.plan);
        let layout = self.layout;

        let scores = task::spawn_blocking(move || -> TractResult<Vec<f32>> {
            let input = image_tensor(&image, layout);
            let outputs = plan.run(tvec!(input.into()))?;
            let output = outputs
                .first()
                .ok_or_else(|| anyhow::anyhow!("model returned no output"))?;
            Ok(output.to_array_view::<f32>()?.iter().copied().collect())
        })
        .await
        .map_err(|e| CoreError::InferenceError(format!("inference task failed: {e}")))?
        .map_err(|e| CoreError::InferenceError(e.to_string()))?;

        let probabilities = to_probabilities(&scores);
        let (index, probability) = arg_max(&probabilities)
            .ok_or_else(|| CoreError::InferenceError("model produced no scores".to_string()))?;

        Ok(ClassificationResult::new(
            label_for_index(index),
            f64::from(probability),
        ))
    }
}
