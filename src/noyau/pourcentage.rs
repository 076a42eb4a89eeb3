// src/noyau/pourcentage.rs
//
// Normalisation du pourcentage, AVANT les jetons.
// - nombre% => (nombre/100)   ex: 50% => (50/100)
// - )%      => )/100          ex: (2+3)% => (2+3)/100
//
// Un `%` ailleurs n’est pas touché : le tokenizer le refusera
// (SymboleInconnu('%')) et le correcteur proposera une réparation.
// Jamais réinjecté dans le tampon éditable.

/// Réécrit le pourcentage en division par 100.
pub fn normaliser_pourcentage(expr: &str) -> String {
    remplacer_parenthese_pourcent(&remplacer_nombre_pourcent(expr))
}

/// Passe 1 : littéral numérique (au plus un point, au moins un chiffre) suivi de `%`.
fn remplacer_nombre_pourcent(expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let mut out = String::with_capacity(expr.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if !est_caractere_numerique(c) {
            out.push(c);
            i += 1;
            continue;
        }

        // run maximal [0-9.]
        let start = i;
        while i < chars.len() && est_caractere_numerique(chars[i]) {
            i += 1;
        }
        let run: String = chars[start..i].iter().collect();

        let suivi_de_pourcent = i < chars.len() && chars[i] == '%';
        if suivi_de_pourcent && est_litteral(&run) {
            out.push('(');
            out.push_str(&run);
            out.push_str("/100)");
            i += 1; // consomme '%'
        } else {
            out.push_str(&run);
        }
    }

    out
}

/// Passe 2 : `)%` => `)/100` (y compris les `)` produites par la passe 1).
fn remplacer_parenthese_pourcent(expr: &str) -> String {
    expr.replace(")%", ")/100")
}

fn est_caractere_numerique(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn est_litteral(run: &str) -> bool {
    run.chars().filter(|&c| c == '.').count() <= 1 && run.chars().any(|c| c.is_ascii_digit())
}
