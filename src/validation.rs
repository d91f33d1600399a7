use std::{borrow::Cow, error::Error, fmt};

pub(crate) fn is_validation_enabled() -> bool {
    !cfg!(feature = "unsafe-disable-validation")
}

/// A value that would violate a documented precondition of the Vulkan call it
/// is destined for.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub context: Cow<'static, str>,
    pub problem: Cow<'static, str>,
    pub vuids: &'static [&'static str],
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (VUIDs: {})",
            self.context,
            self.problem,
            self.vuids.join(", ")
        )
    }
}

impl fmt::Debug for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_empty() {
            write!(f, "{}", self.problem)?;
        } else {
            write!(f, "{}: {}", self.context, self.problem)?;
        }

        if !self.vuids.is_empty() {
            writeln!(f, "\n\nVulkan VUIDs:")?;

            for vuid in self.vuids {
                writeln!(f, "  - {}", vuid)?;
            }
        }

        Ok(())
    }
}

impl Error for ValidationError {}
