//! Mesh handles the draw list refers to
//!
//! Handles are opaque to the game; whatever the host's mesh index hands back
//! (a vertex range, a buffer id) is stored and passed through untouched.

/// Errors resolving meshes from the host's index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The index has no mesh under this name
    Missing(String),
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::Missing(name) => write!(f, "mesh named '{name}' does not appear in index"),
        }
    }
}

impl std::error::Error for MeshError {}

/// Every mesh the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshSet<H> {
    pub duck: H,
    pub target: H,
    pub enemy: H,
    /// Aim direction bar
    pub aim: H,
    /// Power bar drawn over the aim bar, stretched by power
    pub aim_power: H,
    /// Score glyphs, indexed by digit
    pub digits: [H; 10],
}

impl<H: Copy> MeshSet<H> {
    pub const DUCK: &'static str = "Doll";
    pub const TARGET: &'static str = "Egg";
    pub const ENEMY: &'static str = "Cube";
    pub const AIM: &'static str = "White";
    pub const AIM_POWER: &'static str = "Red";
    pub const DIGITS: [&'static str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

    /// Resolve every mesh by name through the host's index
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, MeshError>
    where
        F: FnMut(&str) -> Option<H>,
    {
        let mut find = |name: &str| lookup(name).ok_or_else(|| MeshError::Missing(name.to_string()));

        let duck = find(Self::DUCK)?;
        let target = find(Self::TARGET)?;
        let enemy = find(Self::ENEMY)?;
        let aim = find(Self::AIM)?;
        let aim_power = find(Self::AIM_POWER)?;

        let mut digits = [duck; 10];
        for (slot, name) in digits.iter_mut().zip(Self::DIGITS) {
            *slot = find(name)?;
        }

        Ok(Self {
            duck,
            target,
            enemy,
            aim,
            aim_power,
            digits,
        })
    }
}
