// src/noyau/lecture.rs
//
// Lecture numérique d’un arbre SANS variable.
// - un seul identifiant n’importe où => None
// - division par zéro => NaN (pas d’erreur)
// - les tests d’entier se font en exact (BigInt), jamais par arrondi flottant

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::expr::{Noeud, OpBin, OpUnaire};

/// Valeur de l’arbre si toutes ses feuilles sont des nombres.
/// Itératif (marques Entrer / Appliquer) : pas de limite de profondeur.
pub fn evaluer_si_numerique(e: &Noeud) -> Option<f64> {
    #[derive(Clone, Copy)]
    enum Marque<'a> {
        Entrer(&'a Noeud),
        Unaire(OpUnaire),
        Binaire(OpBin),
    }

    let mut pile: Vec<Marque<'_>> = vec![Marque::Entrer(e)];
    let mut valeurs: Vec<f64> = Vec::with_capacity(16);

    while let Some(m) = pile.pop() {
        match m {
            Marque::Entrer(n) => match n {
                Noeud::Nombre(v) => valeurs.push(*v),
                Noeud::Ident(_) | Noeud::Binaire(OpBin::Autre(_), ..) => return None,
                Noeud::Unaire(op, x) => {
                    pile.push(Marque::Unaire(*op));
                    pile.push(Marque::Entrer(x.as_ref()));
                }
                Noeud::Binaire(op, a, b) => {
                    pile.push(Marque::Binaire(*op));
                    pile.push(Marque::Entrer(b.as_ref()));
                    pile.push(Marque::Entrer(a.as_ref()));
                }
            },

            Marque::Unaire(op) => {
                let v = valeurs.pop()?;
                valeurs.push(match op {
                    OpUnaire::Moins => -v,
                    OpUnaire::Plus => v,
                });
            }

            Marque::Binaire(op) => {
                let r = valeurs.pop()?;
                let l = valeurs.pop()?;
                valeurs.push(appliquer(op, l, r)?);
            }
        }
    }

    valeurs.pop()
}

fn appliquer(op: OpBin, l: f64, r: f64) -> Option<f64> {
    match op {
        OpBin::Plus => Some(l + r),
        OpBin::Moins => Some(l - r),
        OpBin::Fois => Some(l * r),
        OpBin::Div => Some(if r == 0.0 { f64::NAN } else { l / r }),
        OpBin::Puiss => Some(puissance_reelle(l, r)),
        OpBin::Autre(_) => None,
    }
}

/// l^r réel. powf donne 1 pour 1^NaN et (±1)^±∞ : ici ces cas sont indéfinis (NaN).
fn puissance_reelle(l: f64, r: f64) -> f64 {
    if r.is_nan() || (l.abs() == 1.0 && r.is_infinite()) {
        return f64::NAN;
    }
    l.powf(r)
}

/// Entier exact si `v` est fini et sans partie fractionnaire.
pub fn entier_exact(v: f64) -> Option<BigInt> {
    let r = BigRational::from_float(v)?;
    if !r.is_integer() {
        return None;
    }
    Some(r.to_integer())
}

pub fn est_pair(n: &BigInt) -> bool {
    (n % 2u32).is_zero()
}

/// n = b^k avec b >= 2 et k >= 2 ?
///
/// Par convention 1 = 1^k compte comme une puissance ; n <= 0 jamais.
pub fn est_puissance_parfaite(n: &BigInt) -> bool {
    if !n.is_positive() {
        return false;
    }
    if n.is_one() {
        return true;
    }

    // b >= 2 => k <= log2(n)
    let k_max = u32::try_from(n.bits()).unwrap_or(u32::MAX);
    (2..=k_max).any(|k| racine_exacte(n, k).is_some())
}

/// Racine k-ième entière exacte (None si n n’est pas une puissance k-ième).
fn racine_exacte(n: &BigInt, k: u32) -> Option<BigInt> {
    let r = n.nth_root(k);
    if r.pow(k) == *n {
        Some(r)
    } else {
        None
    }
}
