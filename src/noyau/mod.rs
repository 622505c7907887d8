//! Noyau de détection de motifs
//!
//! Organisation interne :
//! - jetons.rs  : tokenisation (x contextuel, multiplication implicite)
//! - rpn.rs     : shunting-yard + construction de l’arbre
//! - expr.rs    : arbre + requêtes structurelles
//! - lecture.rs : lecture numérique (sans variable) + entiers exacts
//! - format.rs  : affichage de l’arbre / des nombres
//! - motifs.rs  : les cinq détecteurs + table Motif
//! - eval.rs    : pipeline complet + démarche

pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod motifs;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{evaluer_motif, DemarcheNoyau, ErreurEval};
pub use motifs::{
    est_addition, est_exposant, est_soustraction, est_var_et_nombre, est_variable, Motif,
};
