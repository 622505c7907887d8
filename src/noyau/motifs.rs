//! Détecteurs de motifs (oui/non) sur la forme d’une expression.
//!
//! Chaque détecteur lit la chaîne brute (jetons -> RPN -> arbre) puis répond.
//! Aucun ne lève d’erreur : un arbre absent donne `false`, sauf quand un repli
//! numérique est défini.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::expr::{
    a_facteur_repete, aplatir_multiplication, compter_feuilles, contient_op_binaire, Noeud, OpBin,
};
use super::jetons::tokenize;
use super::lecture::{entier_exact, est_pair, est_puissance_parfaite, evaluer_si_numerique};
use super::rpn::{from_rpn, to_rpn, ErreurAst};

/// Pipeline commun : jetons -> RPN -> arbre.
pub fn construire_arbre(s: &str) -> Result<Noeud, ErreurAst> {
    let jetons = tokenize(s);
    let rpn = to_rpn(&jetons);
    from_rpn(&rpn).inspect_err(|e| log::debug!("arbre absent pour {s:?}: {e}"))
}

/// Contient une addition binaire.
/// Repli (historique) pour une expression purement numérique : valeur entière paire.
pub fn est_addition(s: &str) -> bool {
    addition_dans(construire_arbre(s).ok().as_ref())
}

fn addition_dans(arbre: Option<&Noeud>) -> bool {
    let Some(a) = arbre else {
        return false;
    };
    if contient_op_binaire(a, OpBin::Plus) {
        return true;
    }

    evaluer_si_numerique(a)
        .and_then(entier_exact)
        .is_some_and(|n| est_pair(&n))
}

/// Contient une soustraction binaire. Repli numérique : valeur finie négative.
pub fn est_soustraction(s: &str) -> bool {
    soustraction_dans(construire_arbre(s).ok().as_ref())
}

fn soustraction_dans(arbre: Option<&Noeud>) -> bool {
    let Some(a) = arbre else {
        return false;
    };
    if contient_op_binaire(a, OpBin::Moins) {
        return true;
    }

    evaluer_si_numerique(a).is_some_and(|v| v.is_finite() && v < 0.0)
}

/// Forme “puissance” :
/// - un `^` n’importe où
/// - sinon un produit dont un facteur se répète ("x*x", "3*3*3")
/// - sinon une valeur entière b^k (k >= 2), ou 1
pub fn est_exposant(s: &str) -> bool {
    exposant_dans(construire_arbre(s).ok().as_ref())
}

fn exposant_dans(arbre: Option<&Noeud>) -> bool {
    let Some(a) = arbre else {
        return false;
    };
    if contient_op_binaire(a, OpBin::Puiss) {
        return true;
    }

    if matches!(a, Noeud::Binaire(OpBin::Fois, ..)) {
        let facteurs = aplatir_multiplication(a);
        if a_facteur_repete(&facteurs) {
            log::debug!("facteur répété parmi {} facteurs", facteurs.len());
            return true;
        }
    }

    evaluer_si_numerique(a)
        .and_then(entier_exact)
        .is_some_and(|n| est_puissance_parfaite(&n))
}

/// La chaîne (sans blancs autour) est exactement un identifiant, et pas un nombre.
pub fn est_variable(s: &str) -> bool {
    let t = s.trim();
    if t.is_empty() || se_lit_comme_nombre(t) {
        return false;
    }

    let mut chars = t.chars();
    let premier_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    premier_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Littéral numérique complet au sens de la lecture décimale d’entrée
/// ("Infinity" inclus, mais pas "inf" / "nan").
fn se_lit_comme_nombre(t: &str) -> bool {
    if matches!(t, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }
    let sans_signe = t.strip_prefix(&['+', '-'][..]).unwrap_or(t);
    sans_signe.starts_with(|c: char| c.is_ascii_digit() || c == '.') && t.parse::<f64>().is_ok()
}

/// Au moins un nombre ET au moins un identifiant, n’importe où dans l’arbre.
pub fn est_var_et_nombre(s: &str) -> bool {
    // une entrée blanche n’a jamais d’arbre
    var_et_nombre_dans(construire_arbre(s).ok().as_ref())
}

fn var_et_nombre_dans(arbre: Option<&Noeud>) -> bool {
    arbre.is_some_and(|a| {
        let (nombres, idents) = compter_feuilles(a);
        nombres > 0 && idents > 0
    })
}

/* ------------------------ Table des motifs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motif {
    Add1,
    Sub1,
    Exp1,
    Var1,
    VarNum,
}

#[derive(Debug, Error, PartialEq)]
pub enum ErreurMotif {
    #[error("motif inconnu: {0:?}")]
    CleInconnue(String),
}

impl Motif {
    pub const TOUS: [Motif; 5] = [
        Motif::Add1,
        Motif::Sub1,
        Motif::Exp1,
        Motif::Var1,
        Motif::VarNum,
    ];

    pub fn cle(self) -> &'static str {
        match self {
            Motif::Add1 => "Add1",
            Motif::Sub1 => "Sub1",
            Motif::Exp1 => "Exp1",
            Motif::Var1 => "Var1",
            Motif::VarNum => "VarNum",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Motif::Add1 => "addition (ou nombre pair)",
            Motif::Sub1 => "soustraction (ou nombre négatif)",
            Motif::Exp1 => "puissance ou facteur répété",
            Motif::Var1 => "variable seule",
            Motif::VarNum => "variable et nombre",
        }
    }

    pub fn tester(self, s: &str) -> bool {
        match self {
            Motif::Add1 => est_addition(s),
            Motif::Sub1 => est_soustraction(s),
            Motif::Exp1 => est_exposant(s),
            Motif::Var1 => est_variable(s),
            Motif::VarNum => est_var_et_nombre(s),
        }
    }

    /// Même réponse que `tester`, sur un arbre déjà construit pour `s`
    /// (`None` : arbre absent). Var1 lit la chaîne, les autres l’arbre.
    pub fn tester_arbre(self, s: &str, arbre: Option<&Noeud>) -> bool {
        match self {
            Motif::Add1 => addition_dans(arbre),
            Motif::Sub1 => soustraction_dans(arbre),
            Motif::Exp1 => exposant_dans(arbre),
            Motif::Var1 => est_variable(s),
            Motif::VarNum => var_et_nombre_dans(arbre),
        }
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cle())
    }
}

impl FromStr for Motif {
    type Err = ErreurMotif;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Motif::TOUS
            .into_iter()
            .find(|m| m.cle() == s.trim())
            .ok_or_else(|| ErreurMotif::CleInconnue(s.to_string()))
    }
}
