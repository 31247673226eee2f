use cilin_core::errors::CilinResult;
use cilin_core::traits::IPosTagger;
use cilin_core::TaggedToken;
use jieba_rs::Jieba;

/// Chinese segmentation and tagging with the bundled jieba dictionary.
pub struct JiebaTagger {
    jieba: Jieba,
    hmm: bool,
}

impl JiebaTagger {
    /// `hmm` enables HMM-based discovery of words missing from the dictionary.
    pub fn new(hmm: bool) -> Self {
        Self {
            jieba: Jieba::new(),
            hmm,
        }
    }
}

impl Default for JiebaTagger {
    fn default() -> Self {
        Self::new(true)
    }
}

impl IPosTagger for JiebaTagger {
    fn tag(&self, text: &str) -> CilinResult<Vec<TaggedToken>> {
        Ok(self
            .jieba
            .tag(text, self.hmm)
            .into_iter()
            .filter(|t| !t.word.trim().is_empty())
            .map(|t| TaggedToken::new(t.word, t.tag))
            .collect())
    }

    fn name(&self) -> &str {
        "jieba"
    }
}
