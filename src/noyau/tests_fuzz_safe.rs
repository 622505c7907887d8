//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : une expression bien formée donne TOUJOURS un arbre
//! - soupe de caractères : jamais de panique, détecteurs purs
//! - chaînes très longues : arbres profonds parcourus sans récursion

use std::time::{Duration, Instant};

use super::motifs::{
    construire_arbre, est_addition, est_exposant, est_soustraction, est_var_et_nombre,
    est_variable, Motif,
};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const ATOMES: [&str; 11] = ["0", "1", "2", "3", "7", "1.5", "2e3", "a", "b", "x", "y_2"];

fn gen_atom(rng: &mut Rng) -> String {
    ATOMES[rng.pick(ATOMES.len() as u32) as usize].to_string()
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(9) {
        0 => gen_atom(rng),
        1 => format!("({a}+{})", gen_expr(rng, depth - 1)),
        2 => format!("({a}-{})", gen_expr(rng, depth - 1)),
        3 => format!("({a}*{})", gen_expr(rng, depth - 1)),
        4 => format!("({a}/{})", gen_expr(rng, depth - 1)),
        5 => format!("({a}^{})", gen_expr(rng, depth - 1)),
        6 => format!("(-{a})"),
        // multiplication implicite
        7 => format!("{a}({})", gen_expr(rng, depth - 1)),
        _ => format!("({a} × {})", gen_expr(rng, depth - 1)),
    }
}

const SOUPE: [char; 24] = [
    '0', '1', '2', '9', '.', 'e', '+', '-', '*', '/', '^', '×', 'x', 'a', 'b', '_', '(', ')', ' ',
    '=', ',', '#', 'E', '(',
];

fn gen_soupe(rng: &mut Rng, max_len: u32) -> String {
    let len = rng.pick(max_len + 1);
    (0..len)
        .map(|_| SOUPE[rng.pick(SOUPE.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helpers somme / produit balancés anti pile ------------------------ */

fn balance(terme: &str, op: char, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}{op}{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_forme_donne_un_arbre() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        if let Err(e) = construire_arbre(&expr) {
            panic!("arbre absent: expr={expr:?} err={e}");
        }
    }
}

#[test]
fn fuzz_safe_soupe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    // Même seed => mêmes entrées => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut vu_present = 0usize;
    let mut vu_absent = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let s = gen_soupe(&mut rng, 12);

        for m in Motif::TOUS {
            assert_eq!(m.tester(&s), m.tester(&s), "{m} non pur sur {s:?}");
        }

        // une variable seule n’a jamais de nombre
        if est_variable(&s) {
            assert!(!est_var_et_nombre(&s), "s={s:?}");
        }

        match construire_arbre(&s) {
            Ok(_) => vu_present += 1,
            Err(_) => {
                // sans arbre, seuls les replis numériques pourraient répondre : il n’y en a pas
                assert!(!est_exposant(&s), "s={s:?}");
                assert!(!est_var_et_nombre(&s), "s={s:?}");
                assert!(!est_addition(&s), "s={s:?}");
                vu_absent += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vu_present > 10, "trop peu d’arbres: {vu_present}");
    assert!(vu_absent > 10, "trop peu d’échecs: {vu_absent}");
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let somme = balance("x", '+', 800);
    assert!(est_addition(&somme));
    assert!(!est_var_et_nombre(&somme));

    let produit = balance("3", '*', 64);
    assert!(est_exposant(&produit));

    budget(t0, max);
}

#[test]
fn fuzz_safe_chaine_longue_de_facteurs() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // chaîne à gauche : x*x*...*x
    let chaine = vec!["x"; 400].join("*");
    assert!(est_exposant(&chaine));
    assert!(!est_addition(&chaine));

    budget(t0, max);
}

#[test]
fn fuzz_safe_chaines_profondes_sans_debordement() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    // chaîne à gauche de 20 000 facteurs : arbre de profondeur 20 000
    let produit = vec!["1"; 20_000].join("*");
    assert!(est_exposant(&produit));
    assert!(!est_addition(&produit));

    // 20 001 moins unaires empilés
    let signes = format!("{}5", "-".repeat(20_001));
    assert!(est_soustraction(&signes));
    assert!(!est_var_et_nombre(&signes));

    for m in Motif::TOUS {
        assert_eq!(m.tester(&produit), m.tester(&produit));
    }

    budget(t0, max);
}
