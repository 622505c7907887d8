// src/noyau/jetons.rs

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Littéral décimal : valeur + texte d’origine (pour la démarche)
    Num { valeur: f64, brut: String },

    // [A-Za-z_][A-Za-z0-9_]* (ou fragment numérique illisible, voir plus bas)
    Ident(String),

    // + - * / ^ × x, plus tout caractère inconnu (repli)
    // NOTE: la normalisation x / × -> * est faite par rpn.rs.
    Op(char),

    LPar,
    RPar,
}

impl Tok {
    /// Jeton “valeur” à gauche d’une multiplication implicite.
    fn finit_operande(&self) -> bool {
        matches!(self, Tok::Num { .. } | Tok::Ident(_) | Tok::RPar)
    }

    /// Jeton “valeur” à droite d’une multiplication implicite.
    fn debute_operande(&self) -> bool {
        matches!(self, Tok::Num { .. } | Tok::Ident(_) | Tok::LPar)
    }
}

fn est_car_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn est_debut_ident(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Tokenize une chaîne en jetons. N’échoue jamais.
///
/// Supporte:
/// - nombres décimaux avec exposant (ex: 12, 1.5, .5, 2e-3)
/// - opérateurs + - * / ^ et × (synonyme de *)
/// - `x` contextuel : multiplication entre deux opérandes ("2x3", "a x b"),
///   identifiant sinon ("x+1", "3x")
/// - identifiants [A-Za-z_][A-Za-z0-9_]*
/// - parenthèses ( )
/// - multiplication implicite : "2(x+1)", "2 y", ")("
///
/// Un fragment numérique illisible ("1e", ".") devient un identifiant ;
/// tout autre caractère devient un Op littéral (les étapes suivantes échoueront proprement).
pub fn tokenize(s: &str) -> Vec<Tok> {
    let chars: Vec<char> = s.trim().chars().collect();
    let n = chars.len();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < n {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs (le signe d’un nombre est un opérateur : rpn.rs décide s’il est unaire)
        if matches!(c, '+' | '-' | '*' | '/' | '^' | '×') {
            out.push(Tok::Op(c));
            i += 1;
            continue;
        }

        // 'x' entre deux opérandes => multiplication, sinon identifiant (branche suivante)
        if c == 'x' && x_est_multiplication(&chars, i) {
            out.push(Tok::Op('x'));
            i += 1;
            continue;
        }

        // Identifiants ASCII : [A-Za-z_][A-Za-z0-9_]*
        if est_debut_ident(c) {
            let start = i;
            i += 1;
            while i < n && est_car_ident(chars[i]) {
                i += 1;
            }
            out.push(Tok::Ident(chars[start..i].iter().collect()));
            continue;
        }

        // Nombre : entier, .fraction, exposant
        if c.is_ascii_digit() || c == '.' {
            let fin = fin_nombre(&chars, i);
            let brut: String = chars[i..fin].iter().collect();
            match brut.parse::<f64>() {
                Ok(valeur) => {
                    out.push(Tok::Num { valeur, brut });
                    i = fin;
                }
                Err(_) => {
                    // repli : fragment jusqu’au prochain séparateur
                    let mut k = i + 1;
                    while k < n && !est_separateur_fragment(chars[k]) {
                        k += 1;
                    }
                    log::trace!("fragment numérique illisible {brut:?} => identifiant");
                    out.push(Tok::Ident(chars[i..k].iter().collect()));
                    i = k;
                }
            }
            continue;
        }

        out.push(Tok::Op(c));
        i += 1;
    }

    let out = inserer_multiplications_implicites(out);
    log::trace!("jetons: {}", format_tokens(&out));
    out
}

/// 'x' est un opérateur seulement si le voisin non blanc de gauche termine un opérande
/// (chiffre, ')' ou caractère d’identifiant) ET le voisin de droite en commence un
/// (chiffre, '(' ou lettre/_).
fn x_est_multiplication(chars: &[char], i: usize) -> bool {
    let gauche = chars[..i].iter().rev().find(|c| !c.is_whitespace());
    let droite = chars[i + 1..].iter().find(|c| !c.is_whitespace());

    let a_gauche = matches!(gauche, Some(&c) if c == ')' || est_car_ident(c));
    let a_droite = matches!(droite, Some(&c) if c.is_ascii_digit() || c == '(' || est_debut_ident(c));

    a_gauche && a_droite
}

/// Fin (exclue) d’un littéral : entier, `.` + fraction, exposant e/E [+-] chiffres.
fn fin_nombre(chars: &[char], start: usize) -> usize {
    let n = chars.len();
    let mut j = start;

    while j < n && chars[j].is_ascii_digit() {
        j += 1;
    }
    if j < n && chars[j] == '.' {
        j += 1;
        while j < n && chars[j].is_ascii_digit() {
            j += 1;
        }
    }
    if j < n && (chars[j] == 'e' || chars[j] == 'E') {
        j += 1;
        if j < n && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        while j < n && chars[j].is_ascii_digit() {
            j += 1;
        }
    }
    j
}

fn est_separateur_fragment(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '+' | '-' | '*' | '/' | '^' | '×' | 'x')
}

/// Insère un `*` entre deux jetons voisins “opérande | opérande”.
fn inserer_multiplications_implicites(jetons: Vec<Tok>) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(jetons.len() * 2);
    for tok in jetons {
        if let Some(prec) = out.last() {
            if prec.finit_operande() && tok.debute_operande() {
                out.push(Tok::Op('*'));
            }
        }
        out.push(tok);
    }
    out
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num { brut, .. } => brut.clone(),
            Tok::Ident(name) => name.clone(),
            Tok::Op(c) => c.to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
