
#[cfg(test)]
mod from;


#[cfg(test)]
mod group_order;

#[cfg(test)]
mod limit_distinct;

#[cfg(test)]
mod insert;
