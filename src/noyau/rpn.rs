// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire un Noeud (ou échouer si l’expression est mal formée)
//
// Règles:
// - précédences : + - => 1 ; * / => 2 ; ^ => 3 ; opérateur inconnu => 0
// - ^ associatif à droite, le reste à gauche
// - '+'/'-' unaire si premier jeton, ou juste après un Op ou '(' :
//   empilé sans rien dépiler (préfixe frais), précédence 1 une fois sur la pile

use thiserror::Error;

use super::expr::{Noeud, OpBin, OpUnaire};
use super::format::format_nombre;
use super::jetons::Tok;

#[derive(Clone, Debug, PartialEq)]
pub enum ElemRpn {
    Num(f64),
    Ident(String),
    Unaire(OpUnaire),
    Binaire(OpBin),
    // '(' jamais refermée, restée sur la pile en fin de lecture
    ParNonFermee,
}

/// Pourquoi la RPN ne donne pas exactement un arbre.
#[derive(Debug, Error, PartialEq)]
pub enum ErreurAst {
    #[error("opérande manquante pour {op}")]
    OperandeManquante { op: String },

    #[error("parenthèse non fermée")]
    ParentheseNonFermee,

    #[error("expression invalide ({0} noeuds restants)")]
    PileFinale(usize),
}

#[derive(Clone, Copy, Debug)]
enum SurPile {
    LPar,
    Bin(OpBin),
    Unaire(OpUnaire),
}

impl SurPile {
    fn precedence(self) -> u8 {
        match self {
            SurPile::LPar => 0,
            SurPile::Bin(op) => op.precedence(),
            SurPile::Unaire(_) => 1,
        }
    }

    fn vers_rpn(self) -> ElemRpn {
        match self {
            SurPile::LPar => ElemRpn::ParNonFermee,
            SurPile::Bin(op) => ElemRpn::Binaire(op),
            SurPile::Unaire(op) => ElemRpn::Unaire(op),
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(1), Op('+'), Num(2), Op('*'), Num(3)]
///   rpn:    [1, 2, 3, *, +]
pub fn to_rpn(tokens: &[Tok]) -> Vec<ElemRpn> {
    let mut out: Vec<ElemRpn> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<SurPile> = Vec::new();

    for (i, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num { valeur, .. } => out.push(ElemRpn::Num(*valeur)),
            Tok::Ident(name) => out.push(ElemRpn::Ident(name.clone())),

            Tok::Op(c) => {
                let op = OpBin::depuis_char(*c);

                // unaire : rien (ou un opérateur, ou '(') juste avant
                let prev = i.checked_sub(1).map(|k| &tokens[k]);
                let apres_operateur = matches!(prev, None | Some(Tok::Op(_)) | Some(Tok::LPar));
                if apres_operateur && matches!(op, OpBin::Plus | OpBin::Moins) {
                    let u = if op == OpBin::Plus {
                        OpUnaire::Plus
                    } else {
                        OpUnaire::Moins
                    };
                    ops.push(SurPile::Unaire(u));
                    continue;
                }

                // dépile tant que la précédence/associativité l’exige (bloqué par '(')
                while let Some(&top) = ops.last() {
                    if matches!(top, SurPile::LPar) {
                        break;
                    }

                    let p_top = top.precedence();
                    let p_tok = op.precedence();

                    let doit_pop = if op.est_associatif_droite() {
                        p_tok < p_top
                    } else {
                        p_tok <= p_top
                    };

                    if !doit_pop {
                        break;
                    }
                    ops.pop();
                    out.push(top.vers_rpn());
                }

                ops.push(SurPile::Bin(op));
            }

            Tok::LPar => ops.push(SurPile::LPar),

            Tok::RPar => {
                // dépile jusqu’à '(' ; une ')' orpheline vide la pile sans autre effet
                while let Some(top) = ops.pop() {
                    if matches!(top, SurPile::LPar) {
                        break;
                    }
                    out.push(top.vers_rpn());
                }
            }
        }
    }

    // vide la pile ops (sommet d’abord)
    while let Some(op) = ops.pop() {
        out.push(op.vers_rpn());
    }

    log::trace!("rpn: {}", format_rpn(&out));
    out
}

/// Construit un Noeud à partir d’une RPN.
///
/// Réussit seulement s’il reste exactement un noeud sur la pile à la fin.
pub fn from_rpn(rpn: &[ElemRpn]) -> Result<Noeud, ErreurAst> {
    let mut st: Vec<Noeud> = Vec::new();

    for elem in rpn {
        match elem {
            ElemRpn::Num(v) => st.push(Noeud::Nombre(*v)),
            ElemRpn::Ident(name) => st.push(Noeud::Ident(name.clone())),

            ElemRpn::Unaire(op) => {
                let x = st.pop().ok_or_else(|| ErreurAst::OperandeManquante {
                    op: op.to_string(),
                })?;
                st.push(Noeud::unaire(*op, x));
            }

            ElemRpn::Binaire(op) => {
                let manque = || ErreurAst::OperandeManquante {
                    op: op.symbole().to_string(),
                };
                let b = st.pop().ok_or_else(manque)?;
                let a = st.pop().ok_or_else(manque)?;
                st.push(Noeud::binaire(*op, a, b));
            }

            ElemRpn::ParNonFermee => return Err(ErreurAst::ParentheseNonFermee),
        }
    }

    if st.len() != 1 {
        return Err(ErreurAst::PileFinale(st.len()));
    }
    st.pop().ok_or(ErreurAst::PileFinale(0))
}

/// RPN en texte (démarche).
pub fn format_rpn(rpn: &[ElemRpn]) -> String {
    rpn.iter()
        .map(|e| match e {
            ElemRpn::Num(v) => format_nombre(*v),
            ElemRpn::Ident(name) => name.clone(),
            ElemRpn::Unaire(op) => op.to_string(),
            ElemRpn::Binaire(op) => op.symbole().to_string(),
            ElemRpn::ParNonFermee => "(".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
