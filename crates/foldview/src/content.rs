//! Static About and Help content, shared by the report page and the CLI.
use foldview_viewer::escape_html;

pub struct Section {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
}

pub struct Topic {
    pub title: &'static str,
    pub sections: &'static [Section],
}

pub const ABOUT: Topic = Topic {
    title: "About ESMFold",
    sections: &[
        Section {
            title: "",
            paragraphs: &[
                "ESMFold is a protein structure prediction model developed by Meta AI Research. \
                 It is based on the ESM-2 language model and predicts protein structures directly \
                 from amino acid sequences.",
            ],
            bullets: &[],
        },
        Section {
            title: "Key features of ESMFold",
            paragraphs: &[],
            bullets: &[
                "Predicts protein structures end-to-end using a language model approach",
                "Fast inference compared to traditional molecular dynamics approaches",
                "Competitive accuracy with AlphaFold2 for many protein structures",
                "Can predict structures for sequences with no known homologs",
            ],
        },
        Section {
            title: "Service",
            paragraphs: &["Predictions are generated by the ESM Metagenomic Atlas API."],
            bullets: &[],
        },
        Section {
            title: "References",
            paragraphs: &[
                "Lin, Z., Akin, H., Rao, R., et al. (2023). Evolutionary-scale prediction of \
                 atomic-level protein structure with a language model. Science, 379(6637), 1123-1130.",
            ],
            bullets: &[],
        },
    ],
};

pub const HELP: Topic = Topic {
    title: "Help & Instructions",
    sections: &[
        Section {
            title: "How to use this tool",
            paragraphs: &[],
            bullets: &[
                "Input your protein sequence with --sequence (one-letter amino acid code), \
                 --fasta (a .fasta, .fa or .txt file) or --example (see `foldview examples`)",
                "Run `foldview predict` to send the sequence to the prediction service",
                "Open report.html in the output directory to view the properties and the 3D structure",
                "Rotate and zoom the structure interactively, or download the PDB file for other software",
            ],
        },
        Section {
            title: "Tips for best results",
            paragraphs: &[],
            bullets: &[
                "For optimal performance, use sequences between 50-400 amino acids",
                "Very short sequences (<20 aa) may not fold into stable structures",
                "Very long sequences (>400 aa) may take longer to process",
                "Sequences longer than 1000 amino acids are rejected",
                "Make sure your sequence contains only standard amino acid letters",
            ],
        },
        Section {
            title: "Troubleshooting",
            paragraphs: &[],
            bullets: &[
                "If prediction fails, try again or use a shorter sequence",
                "Check that your sequence contains only valid amino acid letters",
                "For large proteins, consider splitting into domains or using other tools",
                "Raise --timeout-secs if the service is slow to answer",
            ],
        },
    ],
};

impl Topic {
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n{}\n", self.title, "=".repeat(self.title.len()));
        for section in self.sections {
            out.push('\n');
            if !section.title.is_empty() {
                out.push_str(&format!("{}:\n", section.title));
            }
            for paragraph in section.paragraphs {
                out.push_str(paragraph);
                out.push('\n');
            }
            for bullet in section.bullets {
                out.push_str(&format!("  * {}\n", bullet));
            }
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = format!("<h2 class=\"sub-header\">{}</h2>\n", escape_html(self.title));
        for section in self.sections {
            if !section.title.is_empty() {
                out.push_str(&format!("<h3>{}</h3>\n", escape_html(section.title)));
            }
            for paragraph in section.paragraphs {
                out.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
            }
            if !section.bullets.is_empty() {
                out.push_str("<ul>\n");
                for bullet in section.bullets {
                    out.push_str(&format!("<li>{}</li>\n", escape_html(bullet)));
                }
                out.push_str("</ul>\n");
            }
        }
        out
    }
}
