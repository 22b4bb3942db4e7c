//! The two text bundles.
//!
//! Bundles hold plain text only; colors are applied at render time.

/// Display language, chosen once from the first answer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Portuguese,
}

impl Language {
    /// `sim` or `s` (any case, surrounding whitespace ignored) selects
    /// Portuguese; any other answer, including an empty one, English.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "sim" | "s" => Language::Portuguese,
            _ => Language::English,
        }
    }

    pub fn bundle(self) -> &'static TextBundle {
        match self {
            Language::English => &ENGLISH,
            Language::Portuguese => &PORTUGUESE,
        }
    }
}

/// The language question, asked before a language is known.
pub const LANGUAGE_QUESTION: &str = "Prefere Português? (Sim/Não): ";

/// Every user-facing string of one language.
#[derive(Debug)]
pub struct TextBundle {
    pub title: &'static str,
    pub narrative: &'static str,
    pub continue_prompt: &'static str,
    pub examples_heading: &'static str,
    /// Names for the tuple, string, list, integer and float examples.
    pub example_names: [&'static str; 5],
    pub input_label: &'static str,
    pub pacing: &'static str,
    pub col_structure: &'static str,
    pub col_content: &'static str,
    pub col_shallow: &'static str,
    pub col_deep: &'static str,
    pub legend_title: &'static str,
    pub shallow_label: &'static str,
    pub shallow_def: &'static str,
    pub deep_label: &'static str,
    pub deep_def: &'static str,
    pub facts_title: &'static str,
    pub facts_intro: &'static str,
    pub facts_integer: &'static str,
    pub facts_float: &'static str,
    /// Marker for set and dict-key rows of an unhashable value.
    pub na_unhashable: &'static str,
    /// Marker for the integer row of non-numeric text.
    pub na_not_integer: &'static str,
}

pub static ENGLISH: TextBundle = TextBundle {
    title: "--- TECHNICAL MEMORY INSPECTION ---",
    narrative: "In high-performance development, every byte counts.\n\
                Physical costs are a reality and, at scale, efficiency is non-negotiable.\n\
                This tool allows us to observe and measure how memory is mapped and allocated,\n\
                directly impacting the software architecture as a whole.",
    continue_prompt: "Press ENTER to start inspection...",
    examples_heading: "Examples:",
    example_names: ["Tuple", "String", "List", "Integer", "Float"],
    input_label: "Your input: ",
    pacing: "Auditing physical costs...",
    col_structure: "Structure",
    col_content: "Content",
    col_shallow: "Shallow (Envelope)",
    col_deep: "Deep (Total)",
    legend_title: "--- UNDERSTANDING THE RESULTS ---",
    shallow_label: "Memory (Shallow):",
    shallow_def: "The weight of the identifier/address (regardless of the content).",
    deep_label: "Memory    (Deep):",
    deep_def: "The actual combined weight of the entire structure + the content in the silicon.",
    facts_title: "--- STATIC / IMMUTABLE TYPES ---",
    facts_intro: "'None' and 'Booleans' (True/False) have fixed size (never change).",
    facts_integer: "Integers",
    facts_float: "Floats",
    na_unhashable: "Not Applicable (Mutable)",
    na_not_integer: "Not Applicable",
};

pub static PORTUGUESE: TextBundle = TextBundle {
    title: "--- INSPEÇÃO TÉCNICA DE MEMÓRIA ---",
    narrative: "No desenvolvimento de alta performance, cada byte conta.\n\
                Custos físicos são uma realidade e, em alta escala, a eficiência não se discute.\n\
                Esta ferramenta permite observar e mensurar como a memória é mapeada e alocada,\n\
                impactando diretamente a arquitetura do software como um todo.",
    continue_prompt: "Pressione ENTER para iniciar a inspeção...",
    examples_heading: "Exemplos:",
    example_names: ["Tupla", "String", "Lista", "Inteiro", "Float"],
    input_label: "Sua entrada: ",
    pacing: "Auditando custos físicos...",
    col_structure: "Estrutura",
    col_content: "Conteúdo",
    col_shallow: "Rasa (Envelope)",
    col_deep: "Real (Total)",
    legend_title: "--- ENTENDA OS RESULTADOS ---",
    shallow_label: "Memoria (Rasa):",
    shallow_def: "O peso do identificador/endereço (independente do conteúdo).",
    deep_label: "Memoria (Real):",
    deep_def: "O peso real somado de toda a estrutura + conteúdo no silício.",
    facts_title: "--- TIPOS ESTÁTICOS ---",
    facts_intro: "'None' e 'Booleanos' (True/False) nunca mudam de tamanho.",
    facts_integer: "Inteiros",
    facts_float: "Floats",
    na_unhashable: "Não Aplicável (Mutável)",
    na_not_integer: "Não Aplicável",
};
