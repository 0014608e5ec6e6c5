//! The built-in advisor roster and its canned replies.

use std::sync::Arc;
use std::time::Duration;

use tempotrain_agents::{AdvisorRegistry, CannedAdvisor};

/// Every specialized advisor, in display order.
pub const ADVISOR_NAMES: [&str; 10] = [
    "Agent CP",
    "Agent RTT",
    "Agent TransGP",
    "Agent Astreinte",
    "Agent Intranet GTA",
    "Agent Création de rapports",
    "Agent Gestion des anomalies",
    "Agent Paramétrage GTA",
    "Agent Réglementation sociale",
    "Agent Support client GTA",
];

/// Opening message shown before the first question.
pub const GREETING: &str = "Bonjour ! Je suis votre assistant GTA. Sélectionnez un agent \
     spécialisé et posez votre question. Je suis là pour vous aider sur tous les sujets liés à \
     la Gestion des Temps et Activités.";

/// Typing delay simulated before every reply.
pub const TYPING_DELAY: Duration = Duration::from_millis(1500);

const REPLY_CP: &str = "D'après la convention collective applicable, le salarié acquiert 2,5 \
     jours ouvrables de CP par mois de travail effectif. Pour un temps partiel, le calcul reste \
     identique : ce sont les jours ouvrables de la période qui comptent, pas les heures \
     travaillées.";

const REPLY_CP_FRACTIONNEMENT: &str = "Dès 3 jours de CP pris en dehors de la période légale \
     (hors 5e semaine), le salarié peut bénéficier de jours de fractionnement.";

const REPLY_RTT: &str = "Les RTT pour les cadres au forfait jours se calculent ainsi : 365 jours \
     - 104 week-ends - 25 CP - jours fériés tombant un jour ouvré - 218 jours travaillés = \
     nombre de RTT. Pour 2024, cela donne environ 9 jours de RTT.";

const REPLY_TRANSGP: &str = "Lors d'un transfert de gestion paie (TransGP), les compteurs GTA \
     doivent être synchronisés avant la date effective. Vérifiez les soldes CP, RTT et CET, \
     puis validez avec le gestionnaire paie destinataire.";

/// Build the registry of built-in advisors.
///
/// Three advisors carry a standing reply; the rest answer with the templated
/// acknowledgement. Pass [`Duration::ZERO`] to skip the typing simulation.
pub fn builtin_advisors(typing_delay: Duration) -> AdvisorRegistry {
    let mut registry = AdvisorRegistry::new();
    for name in ADVISOR_NAMES {
        let mut advisor = CannedAdvisor::new(name).with_typing_delay(typing_delay);
        advisor = match name {
            "Agent CP" => advisor
                .with_reply(REPLY_CP)
                .with_topic("fractionnement", REPLY_CP_FRACTIONNEMENT),
            "Agent RTT" => advisor.with_reply(REPLY_RTT),
            "Agent TransGP" => advisor.with_reply(REPLY_TRANSGP),
            _ => advisor,
        };
        registry.register(Arc::new(advisor));
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempotrain_agents::AdviceRequest;

    #[test]
    fn roster_is_complete() {
        let registry = builtin_advisors(Duration::ZERO);
        assert_eq!(registry.len(), ADVISOR_NAMES.len());
        for name in ADVISOR_NAMES {
            assert!(registry.get(name).is_ok(), "missing advisor: {name}");
        }
    }

    #[tokio::test]
    async fn specialists_answer_from_their_reply() {
        let registry = builtin_advisors(Duration::ZERO);
        let advisor = registry.get("Agent TransGP").unwrap();
        let response = advisor
            .respond(&AdviceRequest {
                question: "Que faire lors d'un transfert ?".into(),
            })
            .await
            .unwrap();
        assert!(response.content.contains("compteurs GTA"));
    }

    #[tokio::test]
    async fn cp_fractionnement_topic_takes_over() {
        let registry = builtin_advisors(Duration::ZERO);
        let advisor = registry.get("Agent CP").unwrap();
        let response = advisor
            .respond(&AdviceRequest {
                question: "Comment fonctionne le fractionnement des CP ?".into(),
            })
            .await
            .unwrap();
        assert!(response.content.contains("jours de fractionnement"));
    }

    #[tokio::test]
    async fn generalists_fall_back_to_the_template() {
        let registry = builtin_advisors(Duration::ZERO);
        let advisor = registry.get("Agent Astreinte").unwrap();
        let response = advisor
            .respond(&AdviceRequest {
                question: "Une question".into(),
            })
            .await
            .unwrap();
        assert!(response.content.contains("Agent Astreinte"));
        assert!(response.content.contains("prise en compte"));
    }
}
