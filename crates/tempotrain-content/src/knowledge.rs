//! The knowledge-base search index.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document category in the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocCategory {
    Procedures,
    Definitions,
    CaseStudies,
    TicketTemplates,
    Documentation,
}

impl fmt::Display for DocCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocCategory::Procedures => write!(f, "Procédures"),
            DocCategory::Definitions => write!(f, "Définitions"),
            DocCategory::CaseStudies => write!(f, "Cas pratiques"),
            DocCategory::TicketTemplates => write!(f, "Tickets types"),
            DocCategory::Documentation => write!(f, "Documentation"),
        }
    }
}

impl FromStr for DocCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "procedures" | "procédures" => Ok(DocCategory::Procedures),
            "definitions" | "définitions" => Ok(DocCategory::Definitions),
            "cas" | "cas-pratiques" => Ok(DocCategory::CaseStudies),
            "tickets" | "tickets-types" => Ok(DocCategory::TicketTemplates),
            "docs" | "documentation" => Ok(DocCategory::Documentation),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// One entry in the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeDoc {
    pub title: String,
    pub category: DocCategory,
    pub theme: String,
    pub excerpt: String,
}

fn doc(title: &str, category: DocCategory, theme: &str, excerpt: &str) -> KnowledgeDoc {
    KnowledgeDoc {
        title: title.into(),
        category,
        theme: theme.into(),
        excerpt: excerpt.into(),
    }
}

/// The built-in knowledge base.
pub fn knowledge_base() -> Vec<KnowledgeDoc> {
    vec![
        doc(
            "Procédure de validation des congés payés",
            DocCategory::Procedures,
            "Congés Payés",
            "Étapes complètes pour valider une demande de CP dans l'outil GTA, incluant les cas de refus et les délais réglementaires.",
        ),
        doc(
            "Définition : RTT forfait jours",
            DocCategory::Definitions,
            "RTT",
            "Réduction du Temps de Travail applicable aux cadres au forfait jours. Calcul basé sur le nombre de jours ouvrés de l'année.",
        ),
        doc(
            "Cas pratique : Anomalie pointage salarié multi-sites",
            DocCategory::CaseStudies,
            "Anomalies temps",
            "Comment résoudre une anomalie de pointage pour un salarié travaillant sur plusieurs établissements avec des plannings différents.",
        ),
        doc(
            "Ticket type : Demande de régularisation heures sup",
            DocCategory::TicketTemplates,
            "Heures supplémentaires",
            "Modèle de réponse pour traiter une demande de régularisation d'heures supplémentaires non comptabilisées.",
        ),
        doc(
            "Guide paramétrage compteurs GTA",
            DocCategory::Documentation,
            "Paramétrage GTA",
            "Documentation complète sur la configuration des compteurs de temps dans l'application GTA : CP, RTT, CET, repos compensateur.",
        ),
        doc(
            "Procédure TransGP - Transfert gestion paie",
            DocCategory::Procedures,
            "TransGP",
            "Guide pas-à-pas pour effectuer un transfert de gestion paie entre deux entités, avec checklist de synchronisation GTA.",
        ),
        doc(
            "Définition : Astreinte et temps d'intervention",
            DocCategory::Definitions,
            "Astreintes",
            "Distinction entre période d'astreinte et temps d'intervention effectif. Règles de majoration et repos compensateur.",
        ),
        doc(
            "Cas pratique : Calcul prorata RTT temps partiel",
            DocCategory::CaseStudies,
            "RTT",
            "Méthode de calcul des RTT pour un salarié passant de temps plein à temps partiel en cours d'année.",
        ),
    ]
}

/// Search by case-insensitive query over title and theme, optionally within
/// one category.
pub fn search_docs<'a>(
    docs: &'a [KnowledgeDoc],
    query: Option<&str>,
    category: Option<DocCategory>,
) -> Vec<&'a KnowledgeDoc> {
    let query = query.map(str::to_lowercase);
    docs.iter()
        .filter(|d| category.is_none_or(|c| d.category == c))
        .filter(|d| {
            query.as_deref().is_none_or(|q| {
                d.title.to_lowercase().contains(q) || d.theme.to_lowercase().contains(q)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_has_eight_docs() {
        assert_eq!(knowledge_base().len(), 8);
    }

    #[test]
    fn query_matches_title_or_theme() {
        let docs = knowledge_base();

        let by_title = search_docs(&docs, Some("transgp"), None);
        assert_eq!(by_title.len(), 1);

        let by_theme = search_docs(&docs, Some("rtt"), None);
        assert_eq!(by_theme.len(), 2);
    }

    #[test]
    fn category_narrows_results() {
        let docs = knowledge_base();
        let hits = search_docs(&docs, None, Some(DocCategory::Procedures));
        assert_eq!(hits.len(), 2);

        let none = search_docs(&docs, Some("astreinte"), Some(DocCategory::Procedures));
        assert!(none.is_empty());
    }

    #[test]
    fn category_parsing() {
        assert_eq!("cas".parse::<DocCategory>().unwrap(), DocCategory::CaseStudies);
        assert_eq!("docs".parse::<DocCategory>().unwrap(), DocCategory::Documentation);
        assert!("archives".parse::<DocCategory>().is_err());
    }
}
