//! Accept header negotiation.
//!
//! A supported type's fitness against a media range is 100 for an equal type
//! plus 10 for an equal subtype. The best supported type has the highest
//! fitness, then the highest quality; ties keep the earlier candidate.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaRange<'a> {
    pub ty: &'a str,
    pub subtype: &'a str,
    pub q: f32,
}

impl<'a> MediaRange<'a> {
    pub fn parse(s: &'a str) -> Option<Self> {
        let mut params = s.split(';');
        let full = params.next()?.trim();
        let (ty, subtype) = match full {
            "*" => ("*", "*"),
            _ => {
                let (ty, subtype) = full.split_once('/')?;
                (ty.trim(), subtype.trim())
            }
        };
        if ty.is_empty() || subtype.is_empty() {
            return None;
        }

        let mut q = 1.0;
        for param in params {
            if let Some((k, v)) = param.split_once('=') {
                if k.trim() == "q" {
                    q = match v.trim().parse::<f32>() {
                        Ok(x) if (0.0..=1.0).contains(&x) => x,
                        _ => 1.0,
                    };
                }
            }
        }

        Some(Self { ty, subtype, q })
    }

    fn fitness(&self, range: &MediaRange<'_>) -> Option<i32> {
        let ty_eq = self.ty.eq_ignore_ascii_case(range.ty);
        let sub_eq = self.subtype.eq_ignore_ascii_case(range.subtype);
        let ty_ok = ty_eq || range.ty == "*" || self.ty == "*";
        let sub_ok = sub_eq || range.subtype == "*" || self.subtype == "*";
        if ty_ok && sub_ok {
            Some(i32::from(ty_eq) * 100 + i32::from(sub_eq) * 10)
        } else {
            None
        }
    }
}

/// Parses a comma separated Accept header, skipping malformed ranges.
pub fn parse_accept(header: &str) -> Vec<MediaRange<'_>> {
    header.split(',').filter_map(MediaRange::parse).collect()
}

fn fitness_and_quality(mime: &MediaRange<'_>, ranges: &[MediaRange<'_>]) -> (i32, f32) {
    let mut best = (-1, 0.0);
    for range in ranges {
        if let Some(fitness) = mime.fitness(range) {
            if fitness > best.0 {
                best = (fitness, range.q);
            }
        }
    }
    best
}

/// Index of the supported type best matching `header`, or `None` when no
/// supported type is acceptable.
pub fn best_match<'a, I>(supported: I, header: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let ranges = parse_accept(header);
    let mut best: Option<(usize, i32, f32)> = None;

    for (i, s) in supported.into_iter().enumerate() {
        let mime = match MediaRange::parse(s) {
            Some(m) => m,
            None => continue,
        };
        let (fitness, q) = fitness_and_quality(&mime, &ranges);
        if fitness < 0 || q <= 0.0 {
            continue;
        }
        let better = match best {
            None => true,
            Some((_, f, bq)) => fitness > f || (fitness == f && q > bq),
        };
        if better {
            best = Some((i, fitness, q));
        }
    }

    best.map(|(i, _, _)| i)
}
