// src/noyau/format.rs

use super::expr::{Noeud, OpUnaire};

/// Nombre en texte court : 3 et non 3.0 ; -0 s’affiche 0.
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Affichage infixe entièrement parenthésé (démarche) : "((2*x)+1)".
/// Un Unaire sous un Unaire reçoit ses parenthèses : "-(-2)".
pub fn format_noeud(e: &Noeud) -> String {
    enum Tache<'a> {
        Noeud(&'a Noeud),
        Texte(char),
    }

    let mut out = String::new();
    let mut pile: Vec<Tache<'_>> = vec![Tache::Noeud(e)];

    // empilé à l’envers : le dernier poussé sort en premier
    while let Some(t) = pile.pop() {
        match t {
            Tache::Texte(c) => out.push(c),
            Tache::Noeud(Noeud::Nombre(v)) => out.push_str(&format_nombre(*v)),
            Tache::Noeud(Noeud::Ident(name)) => out.push_str(name),
            Tache::Noeud(Noeud::Unaire(op, x)) => {
                let entoure = matches!(x.as_ref(), Noeud::Unaire(..));
                if entoure {
                    pile.push(Tache::Texte(')'));
                }
                pile.push(Tache::Noeud(x.as_ref()));
                if entoure {
                    pile.push(Tache::Texte('('));
                }
                pile.push(Tache::Texte(match op {
                    OpUnaire::Plus => '+',
                    OpUnaire::Moins => '-',
                }));
            }
            Tache::Noeud(Noeud::Binaire(op, a, b)) => {
                pile.push(Tache::Texte(')'));
                pile.push(Tache::Noeud(b.as_ref()));
                pile.push(Tache::Texte(op.symbole()));
                pile.push(Tache::Noeud(a.as_ref()));
                pile.push(Tache::Texte('('));
            }
        }
    }

    out
}
