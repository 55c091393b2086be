//! Bundled sample papers served when the provider is unreachable.

use crate::models::{Paper, SearchParams};

struct Sample {
    id: &'static str,
    title: &'static str,
    r#abstract: &'static str,
    authors: &'static [&'static str],
    year: &'static str,
    url: &'static str,
    topics: &'static [&'static str],
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "1",
        title: "Attention Is All You Need",
        r#abstract: "We propose a new simple network architecture, the Transformer, based solely on attention mechanisms, dispensing with recurrence and convolutions entirely.",
        authors: &["Ashish Vaswani", "Noam Shazeer", "Niki Parmar", "Jakob Uszkoreit"],
        year: "2017",
        url: "https://arxiv.org/abs/1706.03762",
        topics: &["Machine Learning", "Artificial Intelligence", "Natural Language Processing"],
    },
    Sample {
        id: "2",
        title: "BERT: Pre-training of Deep Bidirectional Transformers for Language Understanding",
        r#abstract: "We introduce a new language representation model called BERT, which stands for Bidirectional Encoder Representations from Transformers.",
        authors: &["Jacob Devlin", "Ming-Wei Chang", "Kenton Lee", "Kristina Toutanova"],
        year: "2018",
        url: "https://arxiv.org/abs/1810.04805",
        topics: &["Machine Learning", "Natural Language Processing"],
    },
    Sample {
        id: "3",
        title: "Deep Residual Learning for Image Recognition",
        r#abstract: "We present a residual learning framework to ease the training of networks that are substantially deeper than those used previously.",
        authors: &["Kaiming He", "Xiangyu Zhang", "Shaoqing Ren", "Jian Sun"],
        year: "2015",
        url: "https://arxiv.org/abs/1512.03385",
        topics: &["Machine Learning", "Computer Vision"],
    },
    Sample {
        id: "4",
        title: "Climate Tipping Points — Too Risky to Bet Against",
        r#abstract: "Evidence is mounting that these events could be more likely than was thought, have high impacts and are interconnected across different biophysical systems, potentially committing the world to long-term irreversible changes.",
        authors: &["Timothy M. Lenton", "Johan Rockström", "Owen Gaffney", "Stefan Rahmstorf"],
        year: "2019",
        url: "https://www.nature.com/articles/d41586-019-03595-0",
        topics: &["Climate Science", "Environmental Science"],
    },
    Sample {
        id: "5",
        title: "Quantum Supremacy Using a Programmable Superconducting Processor",
        r#abstract: "We report the use of a quantum processor to perform a computational task that would be prohibitively difficult for classical computers, achieving quantum supremacy.",
        authors: &["Frank Arute", "Kunal Arya", "Ryan Babbush", "Dave Bacon"],
        year: "2019",
        url: "https://www.nature.com/articles/s41586-019-1666-5",
        topics: &["Quantum Computing", "Computer Science"],
    },
    Sample {
        id: "6",
        title: "The Brain's Default Mode Network",
        r#abstract: "The default mode network (DMN) is a set of brain regions that show increased activity during rest and decreased activity during explicit task performance.",
        authors: &["Marcus E. Raichle", "Ann Mary MacLeod", "Abraham Z. Snyder", "William J. Powers"],
        year: "2001",
        url: "https://www.pnas.org/content/98/2/676",
        topics: &["Neuroscience", "Cognitive Science"],
    },
    Sample {
        id: "7",
        title: "Renewable Energy Integration: Challenges and Solutions",
        r#abstract: "This paper reviews the challenges of integrating renewable energy sources into existing power grids and proposes technical and policy solutions.",
        authors: &["Sarah Johnson", "Michael Chen", "Priya Patel"],
        year: "2020",
        url: "https://example.com/renewable-energy-integration",
        topics: &["Renewable Energy", "Electrical Engineering"],
    },
    Sample {
        id: "8",
        title: "Advances in Neural Information Processing Systems",
        r#abstract: "This paper presents recent advances in neural network architectures and training methods for processing complex information.",
        authors: &["Alex Turner", "Maria Rodriguez", "David Kim"],
        year: "2021",
        url: "https://example.com/neural-information-processing",
        topics: &["Machine Learning", "Artificial Intelligence", "Neuroscience"],
    },
    Sample {
        id: "9",
        title: "Climate Change Impact on Biodiversity: A Systematic Review",
        r#abstract: "A comprehensive review of how climate change affects biodiversity across different ecosystems and geographic regions.",
        authors: &["Emma Wilson", "James Taylor", "Sophia Garcia"],
        year: "2022",
        url: "https://example.com/climate-biodiversity-review",
        topics: &["Climate Science", "Ecology", "Environmental Science"],
    },
    Sample {
        id: "10",
        title: "Quantum Algorithms for Optimization Problems",
        r#abstract: "This paper explores how quantum computing can be applied to solve complex optimization problems more efficiently than classical algorithms.",
        authors: &["Robert Chen", "Lisa Wang", "Thomas Brown"],
        year: "2023",
        url: "https://example.com/quantum-optimization",
        topics: &["Quantum Computing", "Computer Science", "Optimization"],
    },
];

impl Sample {
    fn to_paper(&self) -> Paper {
        Paper {
            id: self.id.to_string(),
            title: self.title.to_string(),
            r#abstract: self.r#abstract.to_string(),
            authors: self.authors.iter().map(|a| (*a).to_string()).collect(),
            year: self.year.to_string(),
            url: self.url.to_string(),
            topics: self.topics.iter().map(|t| (*t).to_string()).collect(),
            citation_count: None,
            is_open_access: None,
        }
    }
}

/// The full bundled sample set.
#[must_use]
pub fn sample_papers() -> Vec<Paper> {
    SAMPLES.iter().map(Sample::to_paper).collect()
}

/// True if `paper` satisfies every filter present in `params`.
#[must_use]
pub fn matches(paper: &Paper, params: &SearchParams) -> bool {
    params.query().is_none_or(|q| paper.matches_text(q))
        && params.topic().is_none_or(|t| paper.has_topic(t))
        && params.year().is_none_or(|y| paper.year == y)
}

/// Sample papers matching `params`, at most `params.limit()` of them.
///
/// Never fails; an empty list means nothing matched.
#[must_use]
pub fn fallback_search(params: &SearchParams) -> Vec<Paper> {
    SAMPLES
        .iter()
        .map(Sample::to_paper)
        .filter(|p| matches(p, params))
        .take(params.limit() as usize)
        .collect()
}
