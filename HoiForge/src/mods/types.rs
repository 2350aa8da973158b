//! Types for country generation progress tracking

/// Progress callback type for country generation
pub type GenerationProgressCallback<'a> = &'a (dyn Fn(&GenerationProgress) + Sync + Send);

/// Progress information during country generation
#[derive(Debug, Clone)]
pub struct GenerationProgress {
    /// Current step
    pub step: GenerationStep,
    /// Current step number (1-indexed)
    pub current: usize,
    /// Total number of steps
    pub total: usize,
    /// File being written (if applicable)
    pub current_file: Option<String>,
}

impl GenerationProgress {
    /// Create a progress update for `step`
    #[must_use]
    pub fn new(step: GenerationStep) -> Self {
        Self {
            step,
            current: step.index(),
            total: GenerationStep::ALL.len(),
            current_file: None,
        }
    }

    /// Create a progress update with a file name
    #[must_use]
    pub fn with_file(step: GenerationStep, file: impl Into<String>) -> Self {
        Self {
            current_file: Some(file.into()),
            ..Self::new(step)
        }
    }

    /// Get the progress percentage (0.0 - 1.0)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

/// A step of country generation, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStep {
    /// Creating the `common/` and `history/` directories
    CreateDirectories,
    /// Writing `common/countries/<Name>.txt`
    CountryFile,
    /// Writing `history/countries/<TAG> - <Name>.txt`
    HistoryFile,
    /// Appending to `common/countries/colors.txt`
    ColorRegistry,
    /// Appending to `common/country_tags/02_countries.txt`
    TagRegistry,
}

impl GenerationStep {
    /// All steps in execution order
    pub const ALL: [GenerationStep; 5] = [
        Self::CreateDirectories,
        Self::CountryFile,
        Self::HistoryFile,
        Self::ColorRegistry,
        Self::TagRegistry,
    ];

    /// 1-based position of this step
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::CreateDirectories => 1,
            Self::CountryFile => 2,
            Self::HistoryFile => 3,
            Self::ColorRegistry => 4,
            Self::TagRegistry => 5,
        }
    }

    /// Get a human-readable description of this step
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateDirectories => "Creating directories",
            Self::CountryFile => "Writing country definition",
            Self::HistoryFile => "Writing country history",
            Self::ColorRegistry => "Appending color registry",
            Self::TagRegistry => "Appending tag registry",
        }
    }
}
