mod pos_tagger;

pub use pos_tagger::IPosTagger;
