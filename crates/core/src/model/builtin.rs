//! The question bank that ships with the crate.
//!
//! Eighty four-choice questions aimed at introductory statistics exams:
//! 22 formula, 17 calculation, 16 concept, 13 distribution and 12 hypothesis
//! testing. The data goes through the same draft validation as any
//! user-supplied bank, so a bad edit here fails loudly at construction.

use crate::model::{Category, QuestionDraft, QuestionRecord};

fn q(category: Category, prompt: &str, correct: &str, distractors: [&str; 3]) -> QuestionRecord {
    QuestionDraft::new(category, prompt, correct, distractors)
        .validate()
        .expect("built-in question must pass validation")
}

#[allow(clippy::too_many_lines)]
pub(crate) fn records() -> Vec<QuestionRecord> {
    use Category::{Calculation, Concept, Distribution, Formula, HypothesisTest};

    vec![
        // Formula recall.
        q(
            Formula,
            "What is the expected value of the binomial distribution B(n, p)?",
            "np",
            ["n/p", "np(1-p)", "n(1-p)"],
        ),
        q(
            Formula,
            "What is the variance of the binomial distribution B(n, p)?",
            "np(1-p)",
            ["np", "np²", "(1-p)/n"],
        ),
        q(
            Formula,
            "What are the mean and variance of the Poisson distribution Po(λ)?",
            "E[X] = V[X] = λ",
            ["E[X] = λ, V[X] = λ²", "E[X] = 1/λ, V[X] = λ", "E[X] = λ², V[X] = λ"],
        ),
        q(
            Formula,
            "What is the standardization formula?",
            "Z = (X - μ) / σ",
            ["Z = (X - μ) / σ²", "Z = (X + μ) / σ", "Z = X / σ"],
        ),
        q(
            Formula,
            "How is the sample mean standardized?",
            "Z = (X̄ - μ) / (σ/√n)",
            ["Z = (X̄ - μ) / σ", "Z = (X̄ - μ) / (σ²/n)", "Z = (X̄ + μ) / (σ/√n)"],
        ),
        q(
            Formula,
            "What is the denominator of the unbiased sample variance?",
            "n - 1",
            ["n", "n + 1", "n²"],
        ),
        q(
            Formula,
            "What is Chebyshev's inequality?",
            "P(|X-μ| ≥ kσ) ≤ 1/k²",
            ["P(|X-μ| ≥ kσ) ≤ 1/k", "P(|X-μ| ≤ kσ) ≥ 1/k²", "P(|X-μ| ≥ kσ) ≤ k²"],
        ),
        q(
            Formula,
            "What is the numerator in Bayes' theorem?",
            "P(B|A) × P(A)",
            ["P(A|B) × P(B)", "P(A) × P(B)", "P(A∩B) / P(B)"],
        ),
        q(
            Formula,
            "What does the addition rule give for P(A∪B)?",
            "P(A) + P(B) - P(A∩B)",
            ["P(A) + P(B)", "P(A) × P(B)", "P(A) + P(B) + P(A∩B)"],
        ),
        q(
            Formula,
            "What is V[aX + b]?",
            "a²V[X]",
            ["aV[X] + b", "a²V[X] + b", "aV[X]"],
        ),
        q(
            Formula,
            "What is the expected value of the geometric distribution Ge(p)?",
            "1/p",
            ["p", "1-p", "p/(1-p)"],
        ),
        q(
            Formula,
            "What is the expected value of the exponential distribution Ex(λ)?",
            "1/λ",
            ["λ", "λ²", "1/λ²"],
        ),
        q(
            Formula,
            "What is the two-sided 5% rejection point z?",
            "1.96",
            ["1.645", "2.58", "2.33"],
        ),
        q(
            Formula,
            "What is the one-sided 5% rejection point z?",
            "1.645",
            ["1.96", "2.58", "1.28"],
        ),
        q(
            Formula,
            "What is the approximate value of e⁻³?",
            "≈ 0.05",
            ["≈ 0.37", "≈ 0.14", "≈ 0.01"],
        ),
        q(
            Formula,
            "What is E[aX + b]?",
            "aE[X] + b",
            ["aE[X]", "E[X] + b", "a²E[X] + b"],
        ),
        q(
            Formula,
            "What is the variance of the geometric distribution Ge(p)?",
            "(1-p)/p²",
            ["1/p²", "p(1-p)", "1/p"],
        ),
        q(
            Formula,
            "What is the variance of the exponential distribution Ex(λ)?",
            "1/λ²",
            ["λ", "1/λ", "λ²"],
        ),
        q(
            Formula,
            "What are the mean and variance of the standard normal distribution?",
            "E[Z]=0, V[Z]=1",
            ["E[Z]=1, V[Z]=0", "E[Z]=0, V[Z]=0", "E[Z]=1, V[Z]=1"],
        ),
        q(
            Formula,
            "What is the definition of the conditional probability P(A|B)?",
            "P(A∩B) / P(B)",
            ["P(A∩B) / P(A)", "P(A) × P(B)", "P(A) / P(B)"],
        ),
        q(
            Formula,
            "What is P(Aᶜ) for the complementary event?",
            "1 - P(A)",
            ["P(A)", "1/P(A)", "-P(A)"],
        ),
        q(
            Formula,
            "What is the variance of the sample mean X̄?",
            "σ²/n",
            ["σ²", "σ/n", "σ²×n"],
        ),
        // Calculation drills, all solvable mentally.
        q(
            Calculation,
            "With mean 50 and standard deviation 10, what is the Z-score of X = 70?",
            "2",
            ["0.2", "20", "-2"],
        ),
        q(
            Calculation,
            "With mean 60 and standard deviation 5, what is the Z-score of X = 50?",
            "-2",
            ["2", "-0.5", "0.5"],
        ),
        q(
            Calculation,
            "If E[X] = 4, what is E[3X + 2]?",
            "14",
            ["12", "6", "18"],
        ),
        q(
            Calculation,
            "If E[X] = 5, what is E[2X - 3]?",
            "7",
            ["10", "13", "4"],
        ),
        q(
            Calculation,
            "If V[X] = 4, what is V[3X]?",
            "36",
            ["12", "4", "9"],
        ),
        q(
            Calculation,
            "If V[X] = 9, what is V[2X + 5]?",
            "36",
            ["18", "23", "41"],
        ),
        q(
            Calculation,
            "What is the expected value of one roll of a fair die?",
            "3.5",
            ["3.0", "4.0", "2.5"],
        ),
        q(
            Calculation,
            "What is the expected number of heads in three tosses of a fair coin?",
            "1.5",
            ["1", "2", "3"],
        ),
        q(
            Calculation,
            "What is the expected value of B(100, 0.3)?",
            "30",
            ["70", "21", "0.3"],
        ),
        q(
            Calculation,
            "What is the variance of B(50, 0.4)?",
            "12",
            ["20", "8", "24"],
        ),
        q(
            Calculation,
            "What is the variance of Po(5)?",
            "5",
            ["25", "√5", "1/5"],
        ),
        q(
            Calculation,
            "With n = 100 and σ = 20, what is the standard error SE?",
            "2",
            ["0.2", "20", "200"],
        ),
        q(
            Calculation,
            "With n = 25 and σ = 10, what is the standard error SE?",
            "2",
            ["0.4", "5", "50"],
        ),
        q(
            Calculation,
            "A Z-score of 2 corresponds to which deviation score?",
            "70",
            ["60", "52", "80"],
        ),
        q(
            Calculation,
            "A Z-score of -1 corresponds to which deviation score?",
            "40",
            ["30", "49", "60"],
        ),
        q(
            Calculation,
            "If P(A) = 0.3 and P(B|A) = 0.8, what is P(A∩B)?",
            "0.24",
            ["1.1", "0.5", "0.027"],
        ),
        q(
            Calculation,
            "With n = 100 and σ = 15, how wide is the 95% confidence interval?",
            "±2.94 (about ±3)",
            ["±1.5", "±15", "±29.4"],
        ),
        // Concepts and interpretation.
        q(
            Concept,
            "What is the correct reading when the null hypothesis is not rejected?",
            "Withhold judgment (the evidence is insufficient)",
            [
                "The null hypothesis was proven true",
                "The alternative hypothesis is true",
                "The experiment failed",
            ],
        ),
        q(
            Concept,
            "What is the correct interpretation of a 95% confidence interval?",
            "Intervals built this way cover the parameter 95% of the time",
            [
                "The parameter falls in this interval with probability 95%",
                "95% of the sample lies in this interval",
                "The error is within 5%",
            ],
        ),
        q(
            Concept,
            "What is a Type I error (α)?",
            "Rejecting a null hypothesis that is true",
            [
                "Missing a null hypothesis that is false",
                "A computational mistake",
                "A sampling mistake",
            ],
        ),
        q(
            Concept,
            "What is a Type II error (β)?",
            "Failing to reject a null hypothesis that is false",
            [
                "Rejecting a null hypothesis that is true",
                "Picking the wrong significance level",
                "Too small a sample size",
            ],
        ),
        q(
            Concept,
            "When does the central limit theorem apply?",
            "When the sample size n is large enough",
            [
                "When the population is normal",
                "When σ is known",
                "When the population is finite",
            ],
        ),
        q(
            Concept,
            "Why divide by n - 1 in the unbiased sample variance?",
            "So its expected value equals the population variance σ²",
            [
                "To simplify the calculation",
                "Because the sample is small",
                "Because the data follow a normal distribution",
            ],
        ),
        q(
            Concept,
            "For independent events A and B, what is P(A∩B)?",
            "P(A) × P(B)",
            ["P(A) + P(B)", "P(A|B)", "P(A) + P(B) - P(A∩B)"],
        ),
        q(
            Concept,
            "How are P(A|B) and P(B|A) related?",
            "They are not equal in general",
            ["They are always equal", "P(A|B) > P(B|A)", "P(A|B) < P(B|A)"],
        ),
        q(
            Concept,
            "What does the law of total probability say?",
            "Split into mutually exclusive events and sum their probabilities",
            [
                "Multiply all the probabilities together",
                "Sum the conditional probabilities",
                "It is Bayes' theorem in reverse",
            ],
        ),
        q(
            Concept,
            "In Bayes' theorem, what is the prior probability?",
            "The probability P(A) before seeing the data",
            [
                "The probability after seeing the data",
                "A conditional probability",
                "The likelihood",
            ],
        ),
        q(
            Concept,
            "In Bayes' theorem, what is the posterior probability?",
            "The probability P(A|E) after seeing the data",
            ["The probability before seeing the data", "P(E|A)", "P(E)"],
        ),
        q(
            Concept,
            "What is E[X + Y] for arbitrary X and Y?",
            "E[X] + E[Y]",
            ["E[X] × E[Y]", "E[XY]", "√(E[X]² + E[Y]²)"],
        ),
        q(
            Concept,
            "What is V[X + Y] when X and Y are independent?",
            "V[X] + V[Y]",
            ["V[X] × V[Y]", "(V[X] + V[Y])²", "√(V[X] + V[Y])"],
        ),
        q(
            Concept,
            "What is V[X - Y] when X and Y are independent?",
            "V[X] + V[Y]",
            ["V[X] - V[Y]", "|V[X] - V[Y]|", "V[X] × V[Y]"],
        ),
        q(Concept, "What is E[c] for a constant c?", "c", ["0", "1", "c²"]),
        q(Concept, "What is V[c] for a constant c?", "0", ["c", "c²", "1"]),
        // Distribution facts.
        q(
            Distribution,
            "Which relation holds for the Poisson distribution?",
            "mean = variance",
            ["mean > variance", "mean < variance", "mean × variance = 1"],
        ),
        q(
            Distribution,
            "What is the skewness of the normal distribution?",
            "0 (symmetric)",
            ["1", "-1", "it depends on σ"],
        ),
        q(
            Distribution,
            "About what probability falls within μ±σ of a normal distribution?",
            "68%",
            ["50%", "95%", "99%"],
        ),
        q(
            Distribution,
            "About what probability falls within μ±2σ of a normal distribution?",
            "95%",
            ["68%", "90%", "99%"],
        ),
        q(
            Distribution,
            "About what probability falls within μ±3σ of a normal distribution?",
            "99.7%",
            ["95%", "99%", "99.9%"],
        ),
        q(
            Distribution,
            "What happens to the t distribution as its degrees of freedom grow?",
            "It approaches the standard normal distribution",
            [
                "Its variance grows",
                "Its skew grows",
                "It approaches the uniform distribution",
            ],
        ),
        q(
            Distribution,
            "What is the mean of the chi-squared distribution with n degrees of freedom?",
            "n",
            ["n-1", "n+1", "2n"],
        ),
        q(
            Distribution,
            "When can the binomial distribution be approximated by the Poisson?",
            "When n is large and p is small",
            ["When n is small and p is large", "When np is small", "When n(1-p) is small"],
        ),
        q(
            Distribution,
            "What is the condition for the normal approximation of the binomial?",
            "np ≥ 5 and n(1-p) ≥ 5",
            ["np ≥ 10", "n ≥ 30", "np ≥ 5 or n(1-p) ≥ 5"],
        ),
        q(
            Distribution,
            "For mutually exclusive events A and B, what is P(A∪B)?",
            "P(A) + P(B)",
            ["P(A) × P(B)", "P(A) + P(B) - P(A∩B)", "0"],
        ),
        q(
            Distribution,
            "For any event A, what range does P(A) lie in?",
            "0 ≤ P(A) ≤ 1",
            ["-1 ≤ P(A) ≤ 1", "0 < P(A) < 1", "P(A) ≥ 0"],
        ),
        q(
            Distribution,
            "What is P(Ω) for the sample space Ω?",
            "1",
            ["0", "∞", "undefined"],
        ),
        q(
            Distribution,
            "What is P(φ) for the empty event φ?",
            "0",
            ["1", "undefined", "∞"],
        ),
        // Hypothesis testing.
        q(
            HypothesisTest,
            "With a p-value of 0.03 at the 5% significance level, what follows?",
            "Reject the null hypothesis",
            [
                "Accept the null hypothesis",
                "No conclusion is possible",
                "Change the significance level",
            ],
        ),
        q(
            HypothesisTest,
            "With a p-value of 0.08 at the 5% significance level, what follows?",
            "Do not reject the null hypothesis",
            [
                "Reject the null hypothesis",
                "Accept the alternative hypothesis",
                "Another experiment is required",
            ],
        ),
        q(
            HypothesisTest,
            "What is the null hypothesis of a two-sided test?",
            "H₀: μ = μ₀",
            ["H₀: μ ≠ μ₀", "H₀: μ > μ₀", "H₀: μ < μ₀"],
        ),
        q(
            HypothesisTest,
            "What is the alternative hypothesis of a right-sided test?",
            "H₁: μ > μ₀",
            ["H₁: μ < μ₀", "H₁: μ = μ₀", "H₁: μ ≠ μ₀"],
        ),
        q(
            HypothesisTest,
            "What is the significance level α?",
            "An upper bound on the probability of a Type I error",
            ["The probability of a Type II error", "The power", "The confidence level"],
        ),
        q(
            HypothesisTest,
            "What is the power (1-β) of a test?",
            "The probability of correctly rejecting a false null hypothesis",
            [
                "The probability of rejecting a true null hypothesis",
                "The significance level",
                "The p-value",
            ],
        ),
        q(
            HypothesisTest,
            "What is the two-sided 1% rejection point z?",
            "2.58",
            ["1.96", "2.33", "1.645"],
        ),
        q(
            HypothesisTest,
            "What is the one-sided 1% rejection point z?",
            "2.33",
            ["2.58", "1.96", "1.645"],
        ),
        q(
            HypothesisTest,
            "When is the t test used?",
            "When the population standard deviation σ is unknown",
            [
                "When the population standard deviation σ is known",
                "When the sample is large",
                "When the data are not normal",
            ],
        ),
        q(
            HypothesisTest,
            "What is the 95% confidence interval for the population mean μ (σ known)?",
            "X̄ ± 1.96 × σ/√n",
            ["X̄ ± 1.96 × σ", "X̄ ± 2.58 × σ/√n", "μ ± 1.96 × σ/√n"],
        ),
        q(
            HypothesisTest,
            "How can a confidence interval be made narrower?",
            "Increase the sample size n",
            ["Raise the confidence level", "Increase σ", "Lower the significance level"],
        ),
        q(
            HypothesisTest,
            "Raising the confidence level from 95% to 99% makes the interval do what?",
            "Widen",
            ["Narrow", "Stay the same", "Become indeterminate"],
        ),
    ]
}
