// src/noyau/expr.rs
//
// AST des expressions lues.
// - Nombre : flottant (jamais NaN à la lecture)
// - Ident  : identifiant non vide
// - Unaire : u+ / u-
// - Binaire: + - * / ^ (ou opérateur littéral inconnu)
//
// Chaque sous-arbre appartient à son parent (Box), pas de partage.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBin {
    Plus,
    Moins,
    Fois,
    Div,
    Puiss,
    // caractère inconnu gardé tel quel (ex: '=')
    Autre(char),
}

impl OpBin {
    /// `x` et `×` sont des synonymes de `*`.
    pub fn depuis_char(c: char) -> OpBin {
        match c {
            '+' => OpBin::Plus,
            '-' => OpBin::Moins,
            '*' | 'x' | '×' => OpBin::Fois,
            '/' => OpBin::Div,
            '^' => OpBin::Puiss,
            autre => OpBin::Autre(autre),
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            OpBin::Plus | OpBin::Moins => 1,
            OpBin::Fois | OpBin::Div => 2,
            OpBin::Puiss => 3,
            OpBin::Autre(_) => 0,
        }
    }

    pub fn est_associatif_droite(self) -> bool {
        matches!(self, OpBin::Puiss)
    }

    pub fn symbole(self) -> char {
        match self {
            OpBin::Plus => '+',
            OpBin::Moins => '-',
            OpBin::Fois => '*',
            OpBin::Div => '/',
            OpBin::Puiss => '^',
            OpBin::Autre(c) => c,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Plus,
    Moins,
}

impl fmt::Display for OpUnaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpUnaire::Plus => write!(f, "u+"),
            OpUnaire::Moins => write!(f, "u-"),
        }
    }
}

// PartialEq et Drop : itératifs, la profondeur suit la longueur de l’entrée.
#[derive(Debug)]
pub enum Noeud {
    Nombre(f64),
    Ident(String),
    Unaire(OpUnaire, Box<Noeud>),
    Binaire(OpBin, Box<Noeud>, Box<Noeud>),
}

impl Noeud {
    pub fn binaire(op: OpBin, a: Noeud, b: Noeud) -> Noeud {
        Noeud::Binaire(op, Box::new(a), Box::new(b))
    }

    pub fn unaire(op: OpUnaire, x: Noeud) -> Noeud {
        Noeud::Unaire(op, Box::new(x))
    }
}

/// Égalité structurelle (nombres comparés par valeur : 0 == -0, NaN != NaN).
impl PartialEq for Noeud {
    fn eq(&self, autre: &Noeud) -> bool {
        let mut pile: Vec<(&Noeud, &Noeud)> = Vec::new();
        let mut courant = (self, autre);

        loop {
            let (g, d) = courant;
            match (g, d) {
                (Noeud::Nombre(a), Noeud::Nombre(b)) if a == b => {}
                (Noeud::Ident(a), Noeud::Ident(b)) if a == b => {}
                (Noeud::Unaire(o1, x1), Noeud::Unaire(o2, x2)) if o1 == o2 => {
                    courant = (x1.as_ref(), x2.as_ref());
                    continue;
                }
                (Noeud::Binaire(o1, a1, b1), Noeud::Binaire(o2, a2, b2)) if o1 == o2 => {
                    pile.push((b1.as_ref(), b2.as_ref()));
                    courant = (a1.as_ref(), a2.as_ref());
                    continue;
                }
                _ => return false,
            }

            match pile.pop() {
                Some(paire) => courant = paire,
                None => return true,
            }
        }
    }
}

impl Drop for Noeud {
    fn drop(&mut self) {
        let mut pile: Vec<Noeud> = Vec::new();
        detacher_enfants(self, &mut pile);

        // chaque noeud retiré n’a plus que des feuilles quand il tombe
        while let Some(mut n) = pile.pop() {
            detacher_enfants(&mut n, &mut pile);
        }
    }
}

fn detacher_enfants(n: &mut Noeud, pile: &mut Vec<Noeud>) {
    let mut detacher = |x: &mut Box<Noeud>| {
        if matches!(**x, Noeud::Unaire(..) | Noeud::Binaire(..)) {
            pile.push(std::mem::replace(x.as_mut(), Noeud::Nombre(0.0)));
        }
    };

    match n {
        Noeud::Nombre(_) | Noeud::Ident(_) => {}
        Noeud::Unaire(_, x) => detacher(x),
        Noeud::Binaire(_, a, b) => {
            detacher(a);
            detacher(b);
        }
    }
}

/// Cherche un noeud Binaire d’opérateur `op` n’importe où dans l’arbre
/// (y compris sous des Unaire). Itératif : pas de récursion sur les arbres profonds.
pub fn contient_op_binaire(noeud: &Noeud, op: OpBin) -> bool {
    let mut pile: Vec<&Noeud> = Vec::with_capacity(32);
    pile.push(noeud);

    while let Some(n) = pile.pop() {
        match n {
            Noeud::Nombre(_) | Noeud::Ident(_) => {}
            Noeud::Unaire(_, x) => pile.push(x.as_ref()),
            Noeud::Binaire(o, a, b) => {
                if *o == op {
                    return true;
                }
                pile.push(a.as_ref());
                pile.push(b.as_ref());
            }
        }
    }

    false
}

/// Facteurs multiplicatifs de haut niveau, dans l’ordre de lecture.
/// "2*x*x" => [2, x, x] ; un noeud qui n’est pas un produit => [noeud].
pub fn aplatir_multiplication(noeud: &Noeud) -> Vec<&Noeud> {
    let mut out = Vec::new();
    let mut pile: Vec<&Noeud> = vec![noeud];

    while let Some(n) = pile.pop() {
        match n {
            Noeud::Binaire(OpBin::Fois, a, b) => {
                // gauche dépilée d’abord
                pile.push(b.as_ref());
                pile.push(a.as_ref());
            }
            _ => out.push(n),
        }
    }

    out
}

/// Compte les feuilles (nombres, identifiants) partout dans l’arbre.
pub fn compter_feuilles(noeud: &Noeud) -> (usize, usize) {
    let mut nombres = 0usize;
    let mut idents = 0usize;

    let mut pile: Vec<&Noeud> = vec![noeud];
    while let Some(n) = pile.pop() {
        match n {
            Noeud::Nombre(_) => nombres += 1,
            Noeud::Ident(_) => idents += 1,
            Noeud::Unaire(_, x) => pile.push(x.as_ref()),
            Noeud::Binaire(_, a, b) => {
                pile.push(a.as_ref());
                pile.push(b.as_ref());
            }
        }
    }

    (nombres, idents)
}

/// Vrai si deux facteurs sont structurellement identiques
/// (même nombre, même identifiant ou même sous-arbre).
pub fn a_facteur_repete(facteurs: &[&Noeud]) -> bool {
    facteurs
        .iter()
        .enumerate()
        .any(|(i, f)| facteurs[i + 1..].iter().any(|g| g == f))
}
