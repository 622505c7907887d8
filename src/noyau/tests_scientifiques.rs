//! Tests scientifiques (campagne) : propriétés des détecteurs.
//!
//! But : vérifier les contrats observables sans dépendre des détails internes.
//! - exemples de référence (addition, soustraction, puissance, variable)
//! - propriétés générées (proptest) : identifiants seuls, nombre collé à un identifiant
//! - pureté : deux appels, même réponse
//! - aller-retour jetons -> RPN -> arbre sur des expressions bien formées
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - le repli numérique d’Add1 teste la PARITÉ d’une valeur purement numérique,
//!   pas la présence d’une addition ("3*4" => vrai, "3*5" => faux).
//! - un identifiant collé à un nombre ne doit pas commencer par e/E (exposant)
//!   ni par x (multiplication contextuelle) : ces cas sont exclus des générateurs.

use proptest::prelude::*;

use super::motifs::{
    construire_arbre, est_addition, est_exposant, est_soustraction, est_var_et_nombre,
    est_variable, Motif,
};

fn arbre_present(s: &str) {
    if let Err(e) = construire_arbre(s) {
        panic!("arbre absent pour {s:?}: {e}");
    }
}

fn arbre_absent(s: &str) {
    assert!(construire_arbre(s).is_err(), "arbre inattendu pour {s:?}");
}

/* ------------------------ Exemples de référence ------------------------ */

#[test]
fn sci_addition() {
    assert!(est_addition("3+4"));
    assert!(!est_addition("3*5"));
}

#[test]
fn sci_soustraction() {
    assert!(est_soustraction("x - 1"));
    assert!(est_soustraction("-5"));
    assert!(!est_soustraction("5"));
}

#[test]
fn sci_exposant() {
    assert!(est_exposant("2^3"));
    assert!(est_exposant("x*x"));
    assert!(est_exposant("8"));
    assert!(!est_exposant("7"));
    assert!(est_exposant("1"));
}

#[test]
fn sci_ambiguite_x() {
    // "2x+1" se lit comme "2*x+1" ; "x+1" garde x comme identifiant
    use super::jetons::{format_tokens, tokenize};
    assert_eq!(format_tokens(&tokenize("2x+1")), format_tokens(&tokenize("2*x+1")));
    assert_eq!(format_tokens(&tokenize("x+1")), "x + 1");
}

#[test]
fn sci_aller_retour_bien_forme() {
    for s in [
        "1",
        "x",
        "2x+1",
        "-(a+b)*c",
        "((1))",
        "2(x+1)(x-1)",
        "a x b",
        "3 × 4 ^ -2",
        "+x - -y",
        "1.5e3 / (2 - 2)",
        "x^y^z",
    ] {
        arbre_present(s);
    }
}

#[test]
fn sci_absent_si_mal_forme() {
    for s in ["", "+", ")(", "(", "2+", "*3", "(2+3", "1 2 +)(", "^"] {
        arbre_absent(s);
    }
}

#[test]
fn sci_mal_forme_donne_faux() {
    for s in ["", "+", ")(", "(", "2+"] {
        for m in Motif::TOUS {
            assert!(!m.tester(s), "{m} sur {s:?}");
        }
    }
}

/* ------------------------ Propriétés générées ------------------------ */

proptest! {
    #[test]
    fn prop_identifiant_seul(s in "[A-Za-z_][A-Za-z0-9_]{0,10}") {
        prop_assume!(s != "Infinity");
        prop_assert!(est_variable(&s));
        prop_assert!(!est_var_et_nombre(&s));
    }

    #[test]
    fn prop_identifiant_entoure_de_blancs(s in "[A-Za-z_][A-Za-z0-9_]{0,6}", g in " {0,3}", d in " {0,3}") {
        prop_assume!(s != "Infinity");
        let entree = format!("{g}{s}{d}");
        prop_assert!(est_variable(&entree));
    }

    #[test]
    fn prop_nombre_colle_a_identifiant(
        n in "[1-9][0-9]{0,3}",
        id in "[a-dA-Df-wF-WyzYZ_][A-Za-z0-9_]{0,5}",
    ) {
        let s = format!("{n}{id}");
        prop_assert!(est_var_et_nombre(&s), "{}", s);
        prop_assert!(!est_variable(&s));
    }

    #[test]
    fn prop_purete(s in "[0-9a-z+*/^() .x-]{0,16}") {
        for m in Motif::TOUS {
            prop_assert_eq!(m.tester(&s), m.tester(&s));
        }
    }

    #[test]
    fn prop_entiers_pairs(n in 0u32..100_000) {
        prop_assert_eq!(est_addition(&n.to_string()), n % 2 == 0);
    }

    #[test]
    fn prop_negatifs(n in 1u32..100_000) {
        let negatif = format!("-{}", n);
        prop_assert!(est_soustraction(&negatif), "{}", negatif);
        prop_assert!(!est_soustraction(&n.to_string()));
    }

    #[test]
    fn prop_carres_et_cubes(b in 2u64..1_000) {
        prop_assert!(est_exposant(&(b * b).to_string()));
        prop_assert!(est_exposant(&(b * b * b).to_string()));
    }
}
