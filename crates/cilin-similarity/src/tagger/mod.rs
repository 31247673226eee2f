//! Bundled [`IPosTagger`](cilin_core::traits::IPosTagger) implementations.

#[cfg(feature = "jieba")]
mod jieba;
mod slash;

#[cfg(feature = "jieba")]
pub use jieba::JiebaTagger;
pub use slash::SlashTagger;
