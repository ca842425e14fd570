/// Буфер сборки SQL-текста.
pub(crate) struct SqlWriter {
    pub buf: String,
}

impl SqlWriter {
    pub fn new(cap: usize) -> Self {
        Self {
            buf: String::with_capacity(cap),
        }
    }

    #[inline]
    pub fn push<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(s.as_ref());
    }

    #[inline]
    pub fn push_char(&mut self, c: char) {
        self.buf.push(c);
    }

    #[inline]
    pub fn push_u64(&mut self, v: u64) {
        use itoa::Buffer;
        let mut buf = Buffer::new();
        self.buf.push_str(buf.format(v));
    }

    #[inline]
    pub fn push_sep(&mut self, i: usize, sep: &str) {
        if i > 0 {
            self.buf.push_str(sep);
        }
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Срезать один хвостовой разделитель (`,` либо ` and`/` or`)
/// вместе с висящими пробелами после него.
pub(crate) fn strip_conjunction(s: String, conjunction: &str) -> String {
    let trimmed = s.trim_end();
    match trimmed.strip_suffix(conjunction) {
        Some(rest) => rest.to_string(),
        None if trimmed.len() == s.len() => s,
        None => trimmed.to_string(),
    }
}

/// Склейка частей оператора: пустые выпадают, разделитель — пробел.
pub(crate) fn join_parts<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out.trim().to_string()
}

/// Диалектный прогон: слева направо заменить первые `count` вхождений
/// `?` на `$1..$n`. Чисто текстовый, выполняется после подсчёта биндов.
pub(crate) fn number_placeholders(sql: &str, count: usize) -> String {
    if count == 0 {
        return sql.to_string();
    }

    let mut out = String::with_capacity(sql.len() + count * 2);
    let mut next = 1usize;
    let mut idx_buf = itoa::Buffer::new();

    for ch in sql.chars() {
        if ch == '?' && next <= count {
            out.push('$');
            out.push_str(idx_buf.format(next));
            next += 1;
        } else {
            out.push(ch);
        }
    }
    out
}
