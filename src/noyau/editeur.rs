//! src/noyau/editeur.rs
//!
//! Machine d’état de saisie (une par session).
//!
//! Rôle : recevoir des touches (chiffre, opérateur, parenthèse, ±, ←, %, Ans, =)
//! et garder un tampon TOUJOURS cohérent.
//!
//! Contrats :
//! - Le tampon n’est jamais vide : vide <=> "0".
//! - Chaque touche est une transition totale : pas de panique, pas d’erreur remontée.
//! - `execute` : le tampon affiche un RÉSULTAT; la prochaine saisie (hors opérateur)
//!   repart d’une expression neuve.
//! - L’aperçu évalue sans jamais modifier le tampon.

use super::correcteur::{proposer_correction, Suggestion};
use super::eval::evaluer;
use super::format::formater_resultat;
use super::jetons::Operateur;
use super::localisation::RapportErreur;

/// Tampon vide.
pub const TAMPON_VIDE: &str = "0";

/// On refuse d’ouvrir une 3e `(` d’affilée.
pub const PARENTHESES_CONSECUTIVES_MAX: usize = 2;

/// Glyphe saisissable via `ajouter`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyphe {
    /// 0..=9
    Chiffre(u8),
    DoubleZero,
    TripleZero,
    Point,
    Op(Operateur),
    Pourcent,
}

impl Glyphe {
    /// Touche textuelle -> glyphe (accepte aussi `*` et `/`).
    pub fn depuis_str(s: &str) -> Option<Glyphe> {
        let g = match s {
            "00" => Glyphe::DoubleZero,
            "000" => Glyphe::TripleZero,
            "." => Glyphe::Point,
            "%" => Glyphe::Pourcent,
            _ => {
                let mut it = s.chars();
                let c = it.next()?;
                if it.next().is_some() {
                    return None;
                }
                if let Some(d) = c.to_digit(10) {
                    Glyphe::Chiffre(d as u8)
                } else {
                    Glyphe::Op(Operateur::depuis_char(c)?)
                }
            }
        };
        Some(g)
    }

    /// Texte inséré / affiché sur la touche.
    pub fn texte(self) -> String {
        match self {
            Glyphe::Chiffre(d) => char::from(b'0' + d.min(9)).to_string(),
            Glyphe::DoubleZero => "00".to_string(),
            Glyphe::TripleZero => "000".to_string(),
            Glyphe::Point => ".".to_string(),
            Glyphe::Op(op) => op.glyphe().to_string(),
            Glyphe::Pourcent => "%".to_string(),
        }
    }

    /// Un opérateur ou un `%` ne peut pas commencer une expression.
    fn peut_commencer(self) -> bool {
        !matches!(self, Glyphe::Op(_) | Glyphe::Pourcent)
    }
}

/// Calcul réussi, transmis tel quel à l’historique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calcul {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Editeur {
    tampon: String,
    execute: bool,

    // diagnostic du dernier "=" en échec
    erreur: Option<RapportErreur>,
    suggestion: Option<Suggestion>,

    derniere_reponse: String,
    derniere_expression: Option<String>,
}

impl Default for Editeur {
    fn default() -> Self {
        Self {
            tampon: TAMPON_VIDE.to_string(),
            execute: false,
            erreur: None,
            suggestion: None,
            derniere_reponse: TAMPON_VIDE.to_string(),
            derniere_expression: None,
        }
    }
}

impl Editeur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn tampon(&self) -> &str {
        &self.tampon
    }

    pub fn est_execute(&self) -> bool {
        self.execute
    }

    pub fn erreur(&self) -> Option<&RapportErreur> {
        self.erreur.as_ref()
    }

    pub fn suggestion(&self) -> Option<&Suggestion> {
        self.suggestion.as_ref()
    }

    pub fn derniere_reponse(&self) -> &str {
        &self.derniere_reponse
    }

    pub fn derniere_expression(&self) -> Option<&str> {
        self.derniere_expression.as_deref()
    }

    /// Aperçu en direct : évalue sans toucher au tampon.
    /// None pour un nombre nu, un résultat affiché, ou une expression en échec.
    pub fn apercu(&self) -> Option<String> {
        if self.execute || self.erreur.is_some() || est_nombre_simple(&self.tampon) {
            return None;
        }
        evaluer(&self.tampon).ok().map(formater_resultat)
    }

    /* ------------------------ Transitions ------------------------ */

    /// Saisie d’un glyphe (chiffre, zéros, point, opérateur, %).
    pub fn ajouter(&mut self, g: Glyphe) {
        if self.erreur.is_some() {
            // une erreur affichée : on repart de zéro
            self.effacer_diagnostic();
            self.execute = false;
            self.tampon = if g.peut_commencer() {
                appliquer_glyphe(TAMPON_VIDE, g)
            } else {
                TAMPON_VIDE.to_string()
            };
            self.tracer("ajouter (après erreur)");
            return;
        }

        self.effacer_diagnostic();

        if self.execute {
            self.execute = false;
            self.tampon = match g {
                // l’opérateur prolonge le résultat
                Glyphe::Op(op) => format!("{}{}", self.tampon, op.glyphe()),
                _ => appliquer_glyphe(TAMPON_VIDE, g),
            };
            self.tracer("ajouter (après résultat)");
            return;
        }

        self.tampon = appliquer_glyphe(&self.tampon, g);
        self.tracer("ajouter");
    }

    /// Touche « ( ) » : ferme le groupe en cours si possible, sinon en ouvre un.
    pub fn ouvrir_ou_fermer_parenthese(&mut self) {
        self.effacer_diagnostic();

        if self.execute {
            self.execute = false;
            self.tampon = "(".to_string();
        } else {
            self.tampon = basculer_parenthese(&self.tampon);
        }
        self.tracer("parenthèse");
    }

    /// ← : retire le dernier glyphe ; vide => "0".
    pub fn effacer(&mut self) {
        self.effacer_diagnostic();
        self.execute = false;

        self.tampon.pop();
        if self.tampon.is_empty() {
            self.tampon = TAMPON_VIDE.to_string();
        }
        self.tracer("effacer");
    }

    /// ± : seulement sur un nombre nu, ou sur un résultat.
    pub fn basculer_signe(&mut self) {
        self.derniere_expression = None;

        if !(self.execute || est_nombre_simple(&self.tampon)) {
            return;
        }
        self.execute = false;

        if self.tampon == TAMPON_VIDE {
            return;
        }
        self.tampon = match self.tampon.strip_prefix('-') {
            Some(sans_signe) => sans_signe.to_string(),
            None => format!("-{}", self.tampon),
        };
        self.tracer("signe");
    }

    /// Ans : insère la dernière réponse (× implicite après chiffre ou `)`).
    pub fn ajouter_derniere_reponse(&mut self) {
        self.effacer_diagnostic();

        if self.execute {
            self.execute = false;
            self.tampon = self.derniere_reponse.clone();
        } else {
            self.tampon = inserer_reponse(&self.tampon, &self.derniere_reponse);
        }
        self.tracer("réponse");
    }

    /// = : évalue le tampon.
    ///
    /// - Succès : le tampon devient le résultat formaté, `execute = true`.
    /// - Échec : tampon intact, rapport d’erreur + suggestion éventuelle.
    /// - "0" ou résultat déjà affiché : rien.
    pub fn calculer(&mut self) -> Option<Calcul> {
        if self.execute {
            return None;
        }
        self.erreur = None;
        self.suggestion = None;

        if self.tampon == TAMPON_VIDE {
            return None;
        }

        let expression = self.tampon.clone();
        match evaluer(&expression) {
            Ok(v) => {
                let resultat = formater_resultat(v);
                log::debug!("calcul {expression:?} = {resultat}");

                self.derniere_reponse = resultat.clone();
                self.derniere_expression = Some(expression.clone());
                self.tampon = resultat.clone();
                self.execute = true;

                Some(Calcul {
                    expression,
                    resultat,
                })
            }
            Err(e) => {
                log::debug!("calcul {expression:?} en échec : {e}");

                self.erreur = Some(RapportErreur::construire(&expression, e));
                self.suggestion = proposer_correction(&expression);
                self.derniere_expression = None;
                self.execute = false;
                None
            }
        }
    }

    /// Accepte la suggestion en attente. false s’il n’y en a pas.
    pub fn appliquer_correction(&mut self) -> bool {
        let Some(sg) = self.suggestion.take() else {
            return false;
        };
        self.effacer_diagnostic();
        self.execute = false;
        self.tampon = sg.fix;
        self.tracer("correction appliquée");
        true
    }

    /// Remplace le tampon en bloc (historique, collage, saisie libre).
    pub fn charger_expression(&mut self, expr: &str) {
        self.effacer_diagnostic();
        self.execute = false;
        self.tampon = if expr.is_empty() {
            TAMPON_VIDE.to_string()
        } else {
            expr.to_string()
        };
        self.tracer("charger");
    }

    /// AC : remise à l’état initial (la dernière réponse est conservée).
    pub fn effacer_tout(&mut self) {
        self.effacer_diagnostic();
        self.execute = false;
        self.tampon = TAMPON_VIDE.to_string();
        self.tracer("effacer tout");
    }

    /* ------------------------ Interne ------------------------ */

    fn effacer_diagnostic(&mut self) {
        self.erreur = None;
        self.suggestion = None;
        self.derniere_expression = None;
    }

    fn tracer(&self, action: &str) {
        log::debug!("{action}: {:?} (execute={})", self.tampon, self.execute);
    }
}

/* ------------------------ Prédicats de grammaire ------------------------ */

fn est_glyphe_operateur(c: char) -> bool {
    Operateur::depuis_char(c).is_some()
}

fn dernier_char(t: &str) -> Option<char> {
    t.chars().next_back()
}

fn finit_par_operateur_ou_ouvrante(t: &str) -> bool {
    dernier_char(t).is_some_and(|c| c == '(' || est_glyphe_operateur(c))
}

/// Segment numérique actif : ce qui suit le dernier opérateur / parenthèse / `%`.
fn segment_actif(t: &str) -> &str {
    match t.rfind(|c: char| est_glyphe_operateur(c) || matches!(c, '(' | ')' | '%')) {
        Some(i) => {
            let c_len = t[i..].chars().next().map_or(1, char::len_utf8);
            &t[i + c_len..]
        }
        None => t,
    }
}

/// Nombre nu, signe optionnel : -?\d+(\.\d+)?
fn est_nombre_simple(t: &str) -> bool {
    let corps = t.strip_prefix('-').unwrap_or(t);
    let (entier, fraction) = match corps.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (corps, None),
    };
    let chiffres = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    chiffres(entier) && fraction.map_or(true, chiffres)
}

fn parentheses_en_attente(t: &str) -> bool {
    let ouvrantes = t.chars().filter(|&c| c == '(').count();
    let fermantes = t.chars().filter(|&c| c == ')').count();
    ouvrantes > fermantes
}

fn parentheses_finales(t: &str) -> usize {
    t.chars().rev().take_while(|&c| c == '(').count()
}

/// `%` refusé après opérateur, `(`, `%`, ou sur un segment vide / "0".
/// Après `)`, le groupe entier sert d’opérande.
fn pourcent_permis(t: &str) -> bool {
    match dernier_char(t) {
        None => false,
        Some(')') => true,
        Some(c) if c == '(' || c == '%' || est_glyphe_operateur(c) => false,
        Some(_) => {
            let seg = segment_actif(t);
            !seg.is_empty() && seg != "0"
        }
    }
}

/* ------------------------ Transitions pures ------------------------ */

fn sans_dernier(t: &str) -> String {
    let mut s = t.to_string();
    s.pop();
    s
}

fn appliquer_glyphe(prev: &str, g: Glyphe) -> String {
    let dernier = dernier_char(prev);

    match g {
        Glyphe::Op(op) => {
            if dernier.is_some_and(est_glyphe_operateur) {
                // deux opérateurs : le plus récent remplace
                let mut s = sans_dernier(prev);
                s.push(op.glyphe());
                return s;
            }
            if dernier == Some('(') {
                return prev.to_string();
            }
            format!("{prev}{}", op.glyphe())
        }

        Glyphe::Pourcent => {
            if pourcent_permis(prev) {
                format!("{prev}%")
            } else {
                prev.to_string()
            }
        }

        Glyphe::Chiffre(_) | Glyphe::DoubleZero | Glyphe::TripleZero | Glyphe::Point => {
            // × implicite : ")5" => ")×5", "5%3" => "5%×3"
            let base = match dernier {
                Some(')' | '%') => format!("{prev}×"),
                _ => prev.to_string(),
            };
            appliquer_numerique(&base, g).unwrap_or_else(|| prev.to_string())
        }
    }
}

/// Règles du segment numérique actif. None = saisie refusée.
fn appliquer_numerique(base: &str, g: Glyphe) -> Option<String> {
    let seg = segment_actif(base);

    match g {
        Glyphe::Point => {
            if seg.contains('.') {
                None
            } else if seg.is_empty() {
                Some(format!("{base}0."))
            } else {
                Some(format!("{base}."))
            }
        }

        Glyphe::Chiffre(0) | Glyphe::DoubleZero | Glyphe::TripleZero => {
            if seg == "0" {
                None
            } else if seg.is_empty() {
                Some(format!("{base}0"))
            } else {
                Some(format!("{base}{}", g.texte()))
            }
        }

        Glyphe::Chiffre(_) => {
            if seg == "0" {
                // le zéro de tête est remplacé
                Some(format!("{}{}", sans_dernier(base), g.texte()))
            } else {
                Some(format!("{base}{}", g.texte()))
            }
        }

        Glyphe::Op(_) | Glyphe::Pourcent => None,
    }
}

fn basculer_parenthese(prev: &str) -> String {
    if parentheses_en_attente(prev) && !finit_par_operateur_ou_ouvrante(prev) {
        return format!("{prev})");
    }

    if parentheses_finales(prev) >= PARENTHESES_CONSECUTIVES_MAX {
        return prev.to_string();
    }
    if prev == TAMPON_VIDE {
        return "(".to_string();
    }
    match dernier_char(prev) {
        Some(c) if c.is_ascii_digit() || c == ')' || c == '%' => format!("{prev}×("),
        _ => format!("{prev}("),
    }
}

fn inserer_reponse(prev: &str, reponse: &str) -> String {
    if prev == TAMPON_VIDE {
        return reponse.to_string();
    }
    match dernier_char(prev) {
        Some(c) if c.is_ascii_digit() || c == ')' => format!("{prev}×{reponse}"),
        _ => format!("{prev}{reponse}"),
    }
}
