//! Round-number tick generation for linear axes.
//!
//! Steps are powers of ten times 1, 2, 5 or 10, picked so that roughly
//! `count` ticks cover the domain. Values are rebuilt from integer indices to
//! avoid accumulating floating-point error.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// `(first index, last index, increment)`; a negative increment means "divide by".
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let div = 10f64.powf(-power) / factor;
        i1 = (start * div).round();
        i2 = (stop * div).round();
        if i1 / div < start {
            i1 += 1.0;
        }
        if i2 / div > stop {
            i2 -= 1.0;
        }
        inc = -div;
    } else {
        let mul = 10f64.powf(power) * factor;
        i1 = (start / mul).round();
        i2 = (stop / mul).round();
        if i1 * mul < start {
            i1 += 1.0;
        }
        if i2 * mul > stop {
            i2 -= 1.0;
        }
        inc = mul;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

pub(crate) fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return 0.0;
    }
    tick_spec(start, stop, count as f64).2
}

pub(crate) fn tick_values(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if i2 < i1 || !inc.is_finite() || inc == 0.0 {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut values: Vec<f64> = (0..n)
        .map(|i| {
            let index = i1 + i as f64;
            if inc < 0.0 { index / -inc } else { index * inc }
        })
        .collect();
    if reverse {
        values.reverse();
    }
    values
}

/// Formats a tick value with just enough decimals for `step` and comma
/// thousands grouping.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let precision = if step.is_finite() && step > 0.0 {
        (-step.abs().log10().floor()).clamp(0.0, 12.0) as usize
    } else {
        0
    };

    let text = format!("{:.*}", precision, value);
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) if rest.chars().any(|c| c != '0' && c != '.') => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
