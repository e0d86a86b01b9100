//! The closed catalog of AI-backed text tools.
//!
//! Each variant carries its prompt template; adding or removing a tool is a
//! compile-time-checked change to this enum, not a runtime table lookup.

/// An AI-backed text tool exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiTool {
    Paraphrase,
    Summarize,
    Grammar,
    SpellChecker,
    RewriteFormal,
    RewriteSimple,
    ArticleRewriter,
    ParaphrasingTool,
    Expand,
    SentenceExpander,
    Shorten,
    SentenceShortener,
    MetaDescriptionGenerator,
    FaqGenerator,
    OutlineGenerator,
    ConclusionGenerator,
    ParagraphGenerator,
    TextCompare,
    DiffChecker,
}

impl AiTool {
    pub const ALL: [AiTool; 19] = [
        AiTool::Paraphrase,
        AiTool::Summarize,
        AiTool::Grammar,
        AiTool::SpellChecker,
        AiTool::RewriteFormal,
        AiTool::RewriteSimple,
        AiTool::ArticleRewriter,
        AiTool::ParaphrasingTool,
        AiTool::Expand,
        AiTool::SentenceExpander,
        AiTool::Shorten,
        AiTool::SentenceShortener,
        AiTool::MetaDescriptionGenerator,
        AiTool::FaqGenerator,
        AiTool::OutlineGenerator,
        AiTool::ConclusionGenerator,
        AiTool::ParagraphGenerator,
        AiTool::TextCompare,
        AiTool::DiffChecker,
    ];

    /// Name used on the wire by API callers.
    pub fn wire_name(&self) -> &'static str {
        match self {
            AiTool::Paraphrase => "paraphrase",
            AiTool::Summarize => "summarize",
            AiTool::Grammar => "grammar",
            AiTool::SpellChecker => "spellChecker",
            AiTool::RewriteFormal => "rewrite_formal",
            AiTool::RewriteSimple => "rewrite_simple",
            AiTool::ArticleRewriter => "article_rewriter",
            AiTool::ParaphrasingTool => "paraphrasingTool",
            AiTool::Expand => "expand",
            AiTool::SentenceExpander => "sentenceExpander",
            AiTool::Shorten => "shorten",
            AiTool::SentenceShortener => "sentenceShortener",
            AiTool::MetaDescriptionGenerator => "metaDescriptionGenerator",
            AiTool::FaqGenerator => "faqGenerator",
            AiTool::OutlineGenerator => "outlineGenerator",
            AiTool::ConclusionGenerator => "conclusionGenerator",
            AiTool::ParagraphGenerator => "paragraphGenerator",
            AiTool::TextCompare => "textCompare",
            AiTool::DiffChecker => "diffChecker",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.wire_name() == name)
    }

    /// Prompt template describing the task and output constraints.
    pub fn prompt(&self) -> &'static str {
        match self {
            AiTool::Paraphrase => {
                "You are a text processing engine.\n\n\
                 Task: Paraphrase the text.\n\n\
                 Rules:\n\
                 - Return ONLY one paraphrased version\n\
                 - Do NOT add explanations, examples, or options\n\
                 - Do NOT use headings, bullet points, or quotes\n\
                 - Output plain text only\n\
                 - Preserve the original meaning"
            }
            AiTool::Summarize => {
                "You are a text processing engine.\n\n\
                 Task: Summarize the text in 2-3 sentences.\n\n\
                 Rules:\n\
                 - Return ONLY one concise summary\n\
                 - No explanations or extra commentary\n\
                 - Plain text only\n\
                 - Preserve key information"
            }
            AiTool::Grammar => {
                "You are a text correction engine.\n\n\
                 Task: Fix grammar, spelling, and clarity.\n\n\
                 Rules:\n\
                 - Do NOT change the meaning\n\
                 - Do NOT add new information\n\
                 - Output ONLY the corrected text\n\
                 - Plain text only"
            }
            AiTool::SpellChecker => {
                "You are a spelling correction engine.\n\n\
                 Task: Correct spelling errors in the text.\n\n\
                 Rules:\n\
                 - Only fix spelling mistakes\n\
                 - Do NOT change grammar or meaning\n\
                 - Output ONLY the corrected text\n\
                 - Plain text only"
            }
            AiTool::RewriteFormal => {
                "You are a text rewriting engine.\n\n\
                 Task: Rewrite the text in a formal tone.\n\n\
                 Rules:\n\
                 - Return ONLY one rewritten version\n\
                 - No explanations or formatting\n\
                 - Plain text only\n\
                 - Maintain the core message"
            }
            AiTool::RewriteSimple => {
                "You are a text rewriting engine.\n\n\
                 Task: Rewrite the text in very simple language.\n\n\
                 Rules:\n\
                 - Use short sentences and common words\n\
                 - One output only\n\
                 - No explanations\n\
                 - Plain text only"
            }
            AiTool::ArticleRewriter => {
                "You are a synonym-based article rewriter.\n\n\
                 Task: Rewrite the article using different words and sentence structures.\n\n\
                 Rules:\n\
                 - Replace words with synonyms\n\
                 - Maintain the original meaning\n\
                 - Return ONLY one rewritten article\n\
                 - No explanations or options\n\
                 - Plain text only"
            }
            AiTool::ParaphrasingTool => {
                "You are a paraphrasing engine with basic rules.\n\n\
                 Task: Paraphrase the text by restructuring sentences.\n\n\
                 Rules:\n\
                 - Change sentence structure\n\
                 - Use alternative words (synonyms)\n\
                 - Maintain original meaning\n\
                 - Return ONLY one paraphrase\n\
                 - Plain text only"
            }
            AiTool::Expand => {
                "You are a text expansion engine.\n\n\
                 Task: Expand the text with relevant details and examples.\n\n\
                 Rules:\n\
                 - Keep it to ONE expanded version\n\
                 - Do NOT add headings or explanations\n\
                 - Plain text only\n\
                 - Add 50-100% more content"
            }
            AiTool::SentenceExpander => {
                "You are a sentence expansion engine using rule-based expansion.\n\n\
                 Task: Expand each sentence with additional details and examples.\n\n\
                 Rules:\n\
                 - Add descriptive details to sentences\n\
                 - Provide relevant examples where applicable\n\
                 - Maintain logical flow\n\
                 - Return ONLY one expanded version\n\
                 - Plain text only"
            }
            AiTool::Shorten => {
                "You are a text shortening engine.\n\n\
                 Task: Shorten the text.\n\n\
                 Rules:\n\
                 - Keep the core meaning\n\
                 - Remove unnecessary words\n\
                 - One output only\n\
                 - Plain text only"
            }
            AiTool::SentenceShortener => {
                "You are a rule-based sentence shortener.\n\n\
                 Task: Shorten sentences by removing unnecessary words.\n\n\
                 Rules:\n\
                 - Eliminate redundant phrases\n\
                 - Use simpler constructions\n\
                 - Maintain meaning\n\
                 - Return ONLY one shortened version\n\
                 - Plain text only"
            }
            AiTool::MetaDescriptionGenerator => {
                "You are a meta description generator.\n\n\
                 Task: Generate an SEO-friendly meta description (150-160 characters).\n\n\
                 Rules:\n\
                 - Must be between 150-160 characters\n\
                 - Include main topic keywords naturally\n\
                 - Make it compelling to encourage clicks\n\
                 - No special characters or formatting\n\
                 - Plain text only"
            }
            AiTool::FaqGenerator => {
                "You are a template-based FAQ generator.\n\n\
                 Task: Generate frequently asked questions and answers based on the text.\n\n\
                 Rules:\n\
                 - Generate 5-7 relevant Q&A pairs\n\
                 - Use the text content for answers\n\
                 - Format as: Q: [Question]\\nA: [Answer]\n\
                 - Make questions clear and concise\n\
                 - One output only"
            }
            AiTool::OutlineGenerator => {
                "You are a template-based outline generator.\n\n\
                 Task: Create a structured outline from the text.\n\n\
                 Rules:\n\
                 - Generate main topics and subtopics\n\
                 - Use hierarchical structure (I. II. III. etc for main, A. B. C. for sub)\n\
                 - Keep points concise\n\
                 - Base on the provided text content\n\
                 - Plain text only"
            }
            AiTool::ConclusionGenerator => {
                "You are a template-based conclusion generator.\n\n\
                 Task: Generate a strong conclusion for the text.\n\n\
                 Rules:\n\
                 - Summarize key points\n\
                 - Include a call-to-action or takeaway\n\
                 - Match the tone of the original text\n\
                 - 3-5 sentences maximum\n\
                 - Plain text only"
            }
            AiTool::ParagraphGenerator => {
                "You are a template-based paragraph generator.\n\n\
                 Task: Generate a well-structured paragraph based on the text topic.\n\n\
                 Rules:\n\
                 - Create topic sentence\n\
                 - Add supporting details\n\
                 - Include concluding sentence\n\
                 - Return ONLY one paragraph\n\
                 - Plain text only"
            }
            AiTool::TextCompare => {
                "You are a text comparison engine.\n\n\
                 Task: Compare two texts and identify differences.\n\n\
                 Rules:\n\
                 - Highlight similarities and differences\n\
                 - Return a structured comparison\n\
                 - Be objective and factual\n\
                 - Plain text only"
            }
            AiTool::DiffChecker => {
                "You are a detailed diff checking engine.\n\n\
                 Task: Check and detail the differences between two versions of text.\n\n\
                 Rules:\n\
                 - Identify additions, deletions, and modifications\n\
                 - Provide a clear diff report\n\
                 - Format as: + [Added] - [Removed] = [Modified]\n\
                 - Plain text only"
            }
        }
    }
}

impl std::fmt::Display for AiTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}
