//! Recommendation generation — fixed templates keyed by weak categories,
//! then cross-cutting rules. Pure function of already-computed results;
//! category results are never mutated here.

use super::report::{Category, CategoryResult, Priority, Recommendation};
use super::text::word_count;
use super::vocab::QUANTIFIED_RE;

/// A category scoring below this gets its template recommendation.
pub const CATEGORY_THRESHOLD: u32 = 70;

const IDEAL_MIN_WORDS: usize = 300;
const IDEAL_MAX_WORDS: usize = 800;

pub fn generate(
    details: &[CategoryResult],
    overall_score: u32,
    cv_text: &str,
    job_description: &str,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    // Per-category templates first, in fixed category order.
    for detail in details {
        if detail.score < CATEGORY_THRESHOLD {
            recommendations.push(category_template(detail.category, job_description));
        }
    }

    // Cross-cutting rules, in fixed order, independent of category scores.
    let words = word_count(cv_text);
    if words < IDEAL_MIN_WORDS {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            title: "Développer le contenu".to_string(),
            description: "Votre CV semble trop court. Ajoutez plus de détails sur vos \
                          expériences, projets et réalisations pour atteindre 400-600 mots."
                .to_string(),
            impact: "Meilleure présentation de votre profil professionnel".to_string(),
        });
    } else if words > IDEAL_MAX_WORDS {
        recommendations.push(Recommendation {
            priority: Priority::Low,
            title: "Condenser le contenu".to_string(),
            description: "Votre CV est peut-être trop long. Concentrez-vous sur les \
                          expériences les plus pertinentes et récentes."
                .to_string(),
            impact: "Maintien de l'attention du recruteur".to_string(),
        });
    }

    if !QUANTIFIED_RE.is_match(cv_text) {
        recommendations.push(Recommendation {
            priority: Priority::High,
            title: "Ajouter des données chiffrées".to_string(),
            description: "Aucun résultat chiffré détecté. Liez chaque réalisation à un \
                          nombre : pourcentage d'amélioration, budget géré, taille d'équipe."
                .to_string(),
            impact: "Crédibilité immédiate de vos réalisations auprès des recruteurs".to_string(),
        });
    }

    if overall_score < CATEGORY_THRESHOLD {
        recommendations.push(Recommendation {
            priority: Priority::Low,
            title: "Privilégier un format compatible ATS".to_string(),
            description: "Utilisez un format texte simple avec des titres de sections \
                          standards (Expérience, Formation, Compétences), sans tableaux ni \
                          éléments graphiques."
                .to_string(),
            impact: "Meilleur passage des filtres automatiques de recrutement".to_string(),
        });
    }

    recommendations
}

fn category_template(category: Category, job_description: &str) -> Recommendation {
    match category {
        Category::Structure => Recommendation {
            priority: Priority::High,
            title: "Optimiser la structure du CV".to_string(),
            description: "Réorganisez votre CV avec des sections claires : Contact, Profil, \
                          Expérience, Formation, Compétences. Assurez-vous que vos coordonnées \
                          sont complètes et correctement formatées."
                .to_string(),
            impact: "Amélioration de 15-20 points du score ATS et meilleure lisibilité"
                .to_string(),
        },
        Category::Keywords => Recommendation {
            priority: Priority::High,
            title: "Enrichir avec des mots-clés pertinents".to_string(),
            description: if job_description.trim().is_empty() {
                "Ajoutez des mots-clés techniques et professionnels spécifiques à votre \
                 secteur d'activité."
                    .to_string()
            } else {
                "Intégrez davantage de termes spécifiques de l'offre d'emploi dans vos \
                 descriptions d'expérience."
                    .to_string()
            },
            impact: "Augmentation significative des chances de passage des filtres automatiques"
                .to_string(),
        },
        Category::Content => Recommendation {
            priority: Priority::Medium,
            title: "Enrichir les descriptions d'expérience".to_string(),
            description: "Développez vos descriptions avec des verbes d'action et des \
                          résultats concrets. Utilisez la méthode STAR (Situation, Tâche, \
                          Action, Résultat)."
                .to_string(),
            impact: "Meilleure compréhension de votre valeur ajoutée par les recruteurs"
                .to_string(),
        },
        Category::Skills => Recommendation {
            priority: Priority::Medium,
            title: "Structurer les compétences par catégories".to_string(),
            description: "Organisez vos compétences en sections claires : techniques, \
                          managériales, linguistiques. Précisez votre niveau de maîtrise pour \
                          chacune."
                .to_string(),
            impact: "Facilitation du matching avec les exigences des postes".to_string(),
        },
        Category::Impact => Recommendation {
            priority: Priority::High,
            title: "Quantifier vos réalisations".to_string(),
            description: "Ajoutez des chiffres, pourcentages, montants ou volumes à vos \
                          réalisations. Par exemple : 'Augmentation des ventes de 25%' plutôt \
                          que 'Amélioration des ventes'."
                .to_string(),
            impact: "Démonstration concrète de votre impact professionnel".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(category: Category, score: u32) -> CategoryResult {
        CategoryResult {
            category,
            score,
            description: category.description().to_string(),
            issues: vec![],
            strengths: vec![],
        }
    }

    fn all_categories(score: u32) -> Vec<CategoryResult> {
        Category::ALL.iter().map(|&c| result(c, score)).collect()
    }

    #[test]
    fn test_weak_categories_each_get_one_template() {
        let details = all_categories(50);
        let cv = vec!["mot"; 400].join(" ");
        let recs = generate(&details, 50, &cv, "");
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert!(titles.contains(&"Optimiser la structure du CV"));
        assert!(titles.contains(&"Enrichir avec des mots-clés pertinents"));
        assert!(titles.contains(&"Enrichir les descriptions d'expérience"));
        assert!(titles.contains(&"Structurer les compétences par catégories"));
        assert!(titles.contains(&"Quantifier vos réalisations"));
    }

    #[test]
    fn test_strong_categories_get_no_template() {
        let details = all_categories(85);
        let cv = format!("Croissance de 25% {}", vec!["mot"; 400].join(" "));
        let recs = generate(&details, 85, &cv, "");
        assert!(recs.is_empty());
    }

    #[test]
    fn test_category_order_is_preserved() {
        let details = all_categories(50);
        let cv = vec!["mot"; 400].join(" ");
        let recs = generate(&details, 50, &cv, "");
        let structure_pos = recs
            .iter()
            .position(|r| r.title.contains("structure"))
            .unwrap();
        let impact_pos = recs
            .iter()
            .position(|r| r.title == "Quantifier vos réalisations")
            .unwrap();
        assert!(structure_pos < impact_pos);
    }

    #[test]
    fn test_short_resume_triggers_expand_rule() {
        let details = all_categories(85);
        let recs = generate(&details, 85, "texte avec croissance de 30%", "");
        assert!(recs.iter().any(|r| r.title == "Développer le contenu"));
        assert!(!recs.iter().any(|r| r.title == "Condenser le contenu"));
    }

    #[test]
    fn test_long_resume_triggers_condense_rule() {
        let details = all_categories(85);
        let cv = format!("25% {}", vec!["mot"; 900].join(" "));
        let recs = generate(&details, 85, &cv, "");
        assert!(recs.iter().any(|r| r.title == "Condenser le contenu"));
    }

    #[test]
    fn test_quantification_rule_silent_when_numbers_present() {
        let details = all_categories(85);
        let cv = format!("Budget de 50000€ {}", vec!["mot"; 400].join(" "));
        let recs = generate(&details, 85, &cv, "");
        assert!(!recs
            .iter()
            .any(|r| r.title == "Ajouter des données chiffrées"));
    }

    #[test]
    fn test_quantification_rule_accepts_head_counts() {
        // A résumé whose only numbers are counts of people or clients is
        // still quantified, same as the measurable-outcome detector sees it.
        let details = all_categories(85);
        let cv = format!(
            "Suivi de 10 clients et encadrement de 5 personnes {}",
            vec!["mot"; 400].join(" ")
        );
        let recs = generate(&details, 85, &cv, "");
        assert!(!recs
            .iter()
            .any(|r| r.title == "Ajouter des données chiffrées"));
    }

    #[test]
    fn test_quantification_rule_fires_without_numbers() {
        let details = all_categories(85);
        let cv = vec!["mot"; 400].join(" ");
        let recs = generate(&details, 85, &cv, "");
        assert!(recs
            .iter()
            .any(|r| r.title == "Ajouter des données chiffrées"));
    }

    #[test]
    fn test_keyword_template_adapts_to_job_description() {
        let details = vec![result(Category::Keywords, 50)];
        let cv = vec!["mot"; 400].join(" ");
        let with_jd = generate(&details, 85, &cv, "offre de poste");
        let rec = with_jd
            .iter()
            .find(|r| r.title.contains("mots-clés"))
            .unwrap();
        assert!(rec.description.contains("l'offre d'emploi"));
    }

    #[test]
    fn test_low_overall_adds_ats_format_rule_once() {
        let details = all_categories(85);
        let cv = format!("25% {}", vec!["mot"; 400].join(" "));
        let recs = generate(&details, 60, &cv, "");
        let count = recs
            .iter()
            .filter(|r| r.title == "Privilégier un format compatible ATS")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_no_duplicate_titles_for_weak_everything() {
        let recs = generate(&all_categories(10), 10, "", "");
        let mut titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        let len = titles.len();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), len);
    }
}
