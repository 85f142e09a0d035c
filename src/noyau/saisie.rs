//! Normalisation de la saisie (écran de la calculatrice).
//!
//! L’écran EST l’expression sérialisée : chiffres, `.` et opérateurs `+ - * /`.
//! Chaque touche produit le nouvel écran à partir de l’ancien, sans jamais échouer :
//! une touche refusée laisse simplement l’écran inchangé.
//!
//! Règles (dans cet ordre) :
//! 1. zéro initial : écran vide + `0` => refusé
//! 2. point : refusé si le dernier opérande contient déjà un `.`
//! 3. `+ * /` après un opérateur => remplace l’opérateur (ou la paire `op-`)
//! 4. sinon : ajout en fin d’écran
//!
//! Garde supplémentaire : un `-` après une paire `op-` est refusé (pas de `3---`).

/// Les quatre opérateurs de l’écran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    pub fn depuis_car(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }
}

/// Une touche de saisie (un caractère de l’alphabet accepté).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9 (une valeur > 9 est refusée par `appliquer`).
    Chiffre(u8),
    Point,
    Op(Operateur),
}

impl Touche {
    pub fn depuis_car(c: char) -> Option<Touche> {
        if let Some(d) = c.to_digit(10) {
            return Some(Touche::Chiffre(d as u8));
        }
        if c == '.' {
            return Some(Touche::Point);
        }
        Operateur::depuis_car(c).map(Touche::Op)
    }

    /// Caractère écrit à l’écran (None pour un chiffre hors 0..=9).
    pub fn car(self) -> Option<char> {
        match self {
            Touche::Chiffre(d) => char::from_digit(u32::from(d), 10),
            Touche::Point => Some('.'),
            Touche::Op(op) => Some(op.symbole()),
        }
    }
}

pub fn est_operateur(c: char) -> bool {
    Operateur::depuis_car(c).is_some()
}

/// Dernier opérande : ce qui suit le dernier opérateur (ou tout l’écran).
pub fn dernier_operande(affichage: &str) -> &str {
    match affichage.rfind(est_operateur) {
        Some(i) => &affichage[i + 1..],
        None => affichage,
    }
}

/// Applique une touche à l’écran et retourne le nouvel écran.
pub fn appliquer(affichage: &str, touche: Touche) -> String {
    let Some(c) = touche.car() else {
        return affichage.to_string();
    };

    // 1) zéro initial inutile
    if affichage.is_empty() && c == '0' {
        return String::new();
    }

    // 2) un seul point par opérande
    if touche == Touche::Point && dernier_operande(affichage).contains('.') {
        return affichage.to_string();
    }

    let mut fin = affichage.chars().rev();
    let dernier = fin.next();
    let avant_dernier = fin.next();
    let dernier_op = dernier.is_some_and(est_operateur);
    let avant_dernier_op = avant_dernier.is_some_and(est_operateur);

    match touche {
        // 3) collision d’opérateurs : '-' est exclu (signe unaire empilable)
        Touche::Op(op) if op != Operateur::Moins && dernier_op => {
            let retirer = if dernier == Some('-') && avant_dernier_op {
                2
            } else {
                1
            };
            // opérateurs ASCII : 1 octet chacun
            let mut out = affichage[..affichage.len() - retirer].to_string();
            out.push(c);
            out
        }

        // garde : jamais trois opérateurs consécutifs
        Touche::Op(Operateur::Moins) if dernier_op && avant_dernier_op => affichage.to_string(),

        // 4) ajout
        _ => {
            let mut out = String::with_capacity(affichage.len() + 1);
            out.push_str(affichage);
            out.push(c);
            out
        }
    }
}

/// Variante clavier : tout caractère hors alphabet est ignoré.
pub fn appliquer_car(affichage: &str, c: char) -> String {
    match Touche::depuis_car(c) {
        Some(t) => appliquer(affichage, t),
        None => affichage.to_string(),
    }
}

/// AC : écran vide.
pub fn effacer() -> String {
    String::new()
}
