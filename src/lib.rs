//! Détecteur de motifs d’expressions
//!
//! Le noyau lit une expression arithmétique simple (nombres, identifiants,
//! `+ - * / ^`, multiplication implicite, parenthèses) et répond à des
//! questions oui/non sur sa forme.

pub mod noyau;
