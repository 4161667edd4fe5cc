/// The base-loss propagation model used for a link.
///
/// `Auto` is only ever a valid *input* (a forced-model request that means
/// "run automatic selection") and never appears as the `model` field of a
/// [`crate::LinkBudget`] result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropagationModel {
    /// Free-space path loss, ITU-R P.525.
    Fspl,
    /// Reserved: no implementation yet. See [`crate::selector::select_model`] docs.
    ItuP452,
    /// Simplified ITU-R P.1546.
    ItuP1546,
    /// Knife-edge diffraction, ITU-R P.526.
    ItuP526,
    /// Okumura-Hata empirical urban/suburban model.
    OkumuraHata,
    /// Run automatic model selection. Valid only as an input.
    Auto,
}

impl PropagationModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropagationModel::Fspl => "FSPL",
            PropagationModel::ItuP452 => "ITU_P452",
            PropagationModel::ItuP1546 => "ITU_P1546",
            PropagationModel::ItuP526 => "ITU_P526",
            PropagationModel::OkumuraHata => "OKUMURA_HATA",
            PropagationModel::Auto => "AUTO",
        }
    }
}
